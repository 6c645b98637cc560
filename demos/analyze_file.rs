//! Example: Analyze an audio file and print its chord timeline
//!
//! Usage:
//!   cargo run --release --example analyze_file -- [--json] <file>
//!
//! Notes:
//! - Decoding happens here in the example; the library API is sample-based.
//! - `--json` emits the segment list as `{"chords": [...]}`.

use std::env;
use std::fs::File;

use chordscribe::{analyze_audio, AnalysisConfig};
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// Decode an audio file to mono f32 samples
fn decode_audio_file(path: &str) -> Result<(Vec<f32>, u32), Box<dyn std::error::Error>> {
    let src = File::open(path)?;
    let mss = MediaSourceStream::new(Box::new(src), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = std::path::Path::new(path).extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let meta_opts: MetadataOptions = Default::default();
    let fmt_opts: FormatOptions = Default::default();

    let probed = symphonia::default::get_probe().format(&hint, mss, &fmt_opts, &meta_opts)?;
    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or("No supported audio tracks found")?;

    let track_id = track.id;
    let sample_rate = track.codec_params.sample_rate.unwrap_or(44100);
    let mut decoder =
        symphonia::default::get_codecs().make(&track.codec_params, &DecoderOptions::default())?;

    let mut mono: Vec<f32> = Vec::new();
    let mut sample_buf: Option<SampleBuffer<f32>> = None;

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(_) => break,
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => {
                if sample_buf.is_none() {
                    let spec = *decoded.spec();
                    let duration = decoded.capacity() as u64;
                    sample_buf = Some(SampleBuffer::<f32>::new(duration, spec));
                }

                if let Some(buf) = sample_buf.as_mut() {
                    let channels = decoded.spec().channels.count();
                    buf.copy_interleaved_ref(decoded);
                    // Downmix interleaved frames to mono
                    for frame in buf.samples().chunks(channels) {
                        mono.push(frame.iter().sum::<f32>() / channels as f32);
                    }
                }
            }
            Err(symphonia::core::errors::Error::DecodeError(_)) => {
                // Skip corrupted packets
                continue;
            }
            Err(e) => return Err(Box::new(e)),
        }
    }

    Ok((mono, sample_rate))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut json = false;
    let mut path: Option<String> = None;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "--help" | "-h" => {
                eprintln!("Usage: analyze_file [--json] <file>");
                return Ok(());
            }
            _ => path = Some(arg),
        }
    }

    let path = path.ok_or("Provide an audio file path. Use --help for usage.")?;

    let (samples, sample_rate) = decode_audio_file(&path)?;
    eprintln!(
        "Decoded {}: {:.1}s at {} Hz",
        path,
        samples.len() as f32 / sample_rate as f32,
        sample_rate
    );

    let analysis = analyze_audio(&samples, sample_rate, AnalysisConfig::default())?;

    if json {
        println!(
            "{}",
            serde_json::to_string(&serde_json::json!({ "chords": analysis.segments }))?
        );
    } else {
        println!("Chord timeline ({} segments):", analysis.segments.len());
        for segment in &analysis.segments {
            println!(
                "  {:7.2}s - {:7.2}s  {}",
                segment.start_sec, segment.end_sec, segment.label
            );
        }
        println!(
            "Analyzed {} frames in {:.2} ms",
            analysis.metadata.frame_count, analysis.metadata.processing_time_ms
        );
    }

    Ok(())
}
