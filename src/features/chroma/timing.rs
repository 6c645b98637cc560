//! Frame-to-time mapping

/// Compute the absolute start time in seconds of each analysis frame
///
/// Frame `i` starts at sample `i * hop_size`, so its offset is
/// `i * hop_size / sample_rate`. The mapping must use the same hop size and
/// sample rate as the chroma extraction that produced the frames.
///
/// # Example
///
/// ```
/// use chordscribe::features::chroma::frames_to_time;
///
/// let times = frames_to_time(3, 44100, 512);
/// assert_eq!(times.len(), 3);
/// assert_eq!(times[0], 0.0);
/// assert!((times[1] - 512.0 / 44100.0).abs() < 1e-6);
/// ```
pub fn frames_to_time(frame_count: usize, sample_rate: u32, hop_size: usize) -> Vec<f32> {
    (0..frame_count)
        .map(|i| (i * hop_size) as f32 / sample_rate as f32)
        .collect()
}
