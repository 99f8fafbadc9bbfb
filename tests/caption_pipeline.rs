//! End-to-end pipeline tests against a loopback HTTP server.

use std::{
    io::{Cursor, Read as _, Write as _},
    net::TcpListener,
    path::PathBuf,
    thread,
};

use captioner::CaptionError;
use image::{Rgba, RgbaImage};

fn init_test_logging() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn out_dir() -> PathBuf {
    let dir = PathBuf::from("target").join("caption_pipeline");
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn encode_png(image: &RgbaImage) -> Vec<u8> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(image.clone())
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

/// Serves `body` for a single request on an ephemeral loopback port and
/// returns the URL to request it from.
fn serve_once(body: Vec<u8>, status_line: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut request = [0u8; 1024];
            let _ = stream.read(&mut request);
            let header = format!(
                "{status_line}\r\nContent-Type: image/png\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = stream.write_all(header.as_bytes());
            let _ = stream.write_all(&body);
        }
    });

    format!("http://{addr}/source.png")
}

/// A loopback URL that refuses connections: bind an ephemeral port, then
/// drop the listener before anyone connects.
fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/source.png")
}

#[test]
fn caption_writes_output_with_source_dimensions() {
    init_test_logging();

    let source = RgbaImage::from_pixel(200, 100, Rgba([40, 90, 160, 255]));
    let url = serve_once(encode_png(&source), "HTTP/1.1 200 OK");
    let out = out_dir().join("dimensions.png");
    let _ = std::fs::remove_file(&out);

    let written = captioner::caption(&url, "HELLO", &out).unwrap();
    assert_eq!(written, out);

    let result = image::open(&out).unwrap().to_rgba8();
    assert_eq!(result.dimensions(), (200, 100));
    // The caption changed some pixels.
    assert!(result.pixels().any(|p| *p == Rgba([0, 0, 0, 255])));
}

#[test]
fn caption_with_empty_text_still_succeeds() {
    init_test_logging();

    let source = RgbaImage::from_pixel(64, 64, Rgba([10, 200, 10, 255]));
    let url = serve_once(encode_png(&source), "HTTP/1.1 200 OK");
    let out = out_dir().join("empty_text.png");
    let _ = std::fs::remove_file(&out);

    captioner::caption(&url, "", &out).unwrap();

    let result = image::open(&out).unwrap().to_rgba8();
    assert_eq!(result.dimensions(), (64, 64));
    // The degenerate padding-only box is still drawn.
    assert!(result.pixels().any(|p| *p == Rgba([0, 0, 0, 255])));
}

#[test]
fn unreachable_url_is_a_fetch_error_and_writes_nothing() {
    init_test_logging();

    let out = out_dir().join("never_written.png");
    let _ = std::fs::remove_file(&out);

    let err = captioner::caption(&refused_url(), "HI", &out).unwrap_err();
    assert!(matches!(err, CaptionError::Fetch(_)), "got {err}");
    assert!(!out.exists(), "no output may be written on transport failure");
}

#[test]
fn non_2xx_status_is_a_fetch_error() {
    init_test_logging();

    let url = serve_once(b"gone".to_vec(), "HTTP/1.1 404 Not Found");
    let out = out_dir().join("status_404.png");
    let _ = std::fs::remove_file(&out);

    let err = captioner::caption(&url, "HI", &out).unwrap_err();
    assert!(matches!(err, CaptionError::Fetch(_)), "got {err}");
    assert!(!out.exists());
}

#[test]
fn non_image_body_is_a_decode_error() {
    init_test_logging();

    let url = serve_once(b"<html>not an image</html>".to_vec(), "HTTP/1.1 200 OK");
    let out = out_dir().join("decode_failure.png");
    let _ = std::fs::remove_file(&out);

    let err = captioner::caption(&url, "HI", &out).unwrap_err();
    assert!(matches!(err, CaptionError::Decode(_)), "got {err}");
    assert!(!out.exists());
}

#[test]
fn unwritable_output_path_is_a_write_error() {
    init_test_logging();

    let source = RgbaImage::from_pixel(32, 32, Rgba([255, 255, 0, 255]));
    let url = serve_once(encode_png(&source), "HTTP/1.1 200 OK");
    let out = out_dir().join("missing_dir").join("out.png");

    let err = captioner::caption(&url, "HI", &out).unwrap_err();
    assert!(matches!(err, CaptionError::Write(_)), "got {err}");
}

#[test]
fn identical_inputs_produce_byte_identical_outputs() {
    init_test_logging();

    let source = RgbaImage::from_pixel(120, 80, Rgba([70, 70, 70, 255]));
    let png = encode_png(&source);

    let out_a = out_dir().join("idempotent_a.png");
    let out_b = out_dir().join("idempotent_b.png");
    captioner::caption(&serve_once(png.clone(), "HTTP/1.1 200 OK"), "TWICE", &out_a).unwrap();
    captioner::caption(&serve_once(png, "HTTP/1.1 200 OK"), "TWICE", &out_b).unwrap();

    assert_eq!(std::fs::read(&out_a).unwrap(), std::fs::read(&out_b).unwrap());
}
