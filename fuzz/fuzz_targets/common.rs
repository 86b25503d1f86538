use vtf_view::TextureView;

/// Asserts that `slice` is a sub-slice of `data`.
pub fn assert_within(data: &[u8], slice: &[u8]) {
    if slice.is_empty() {
        return;
    }
    let range = data.as_ptr_range();
    let inner = slice.as_ptr_range();
    assert!(
        inner.start >= range.start && inner.end <= range.end,
        "Returned slice {inner:?} lies outside the input {range:?}"
    );
}

/// Runs every query of the view, checking that all returned slices borrow from `data`.
pub fn exercise_view(data: &[u8]) {
    let Ok(view) = TextureView::new(data) else {
        return;
    };

    let header = view.header();
    let layout = view.layout();
    let _ = layout.total_size();

    if let Ok(table) = view.resources() {
        for entry in table.iter() {
            let _ = entry.resource_type();
            if let Ok(chunk) = table.entry_data(&entry, 4) {
                assert_within(data, chunk);
            }
        }
    }

    if let Ok(thumbnail) = view.thumbnail_data() {
        assert_within(data, thumbnail);
    }
    if let Ok(Some(sheet)) = view.sheet_data() {
        assert_within(data, sheet);
    }
    let _ = view.crc32();
    let _ = view.lod_control_settings();
    let _ = view.settings_ex();

    // Cap the walk; headers can declare up to 65535 frames.
    let frames = header.num_frames.clamp(1, 4);
    let faces = view.face_count().min(6) as u16;
    for mip in 0..header.num_mip_levels.min(16) {
        for frame in 0..frames {
            for face in 0..faces {
                if let Ok(image) = view.image_data(frame, face, mip) {
                    assert_within(data, image);
                    if !image.is_empty() {
                        assert_eq!(image.len(), layout.mip_size(mip) as usize);
                    }
                }
            }
        }
    }
}
