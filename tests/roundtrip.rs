extern crate mandelbrot;
extern crate num;
extern crate tempfile;

use mandelbrot::{Color, PpmImage, RenderConfig, Renderer};
use num::Complex;

#[test]
fn dump_then_load_reproduces_the_raster() {
    let config = RenderConfig {
        width: 4,
        height: 4,
        max_iterations: 50,
        ..RenderConfig::default()
    };
    let image = Renderer::new(config).unwrap().render().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("m.ppm");
    image.dump(&path).unwrap();

    let reread = PpmImage::load(&path).unwrap();
    assert_eq!(reread.width(), 4);
    assert_eq!(reread.height(), 4);
    assert_eq!(reread, image);
}

#[test]
fn every_pixel_survives_the_file() {
    let mut image = PpmImage::new(3, 2).unwrap();
    let mut v = 0;
    for y in 0..2 {
        for x in 0..3 {
            image.set_pixel(
                x,
                y,
                Color {
                    r: v,
                    g: v + 1,
                    b: v + 2,
                },
            );
            v += 3;
        }
    }

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stripes.ppm");
    image.dump(&path).unwrap();

    let reread = PpmImage::load(&path).unwrap();
    for y in 0..2 {
        for x in 0..3 {
            assert_eq!(reread.pixel(x, y), image.pixel(x, y));
        }
    }
}

#[test]
fn a_wider_viewport_renders_edge_to_edge() {
    // Regression check on the full pipeline at an asymmetric size:
    // dimensions must come back exactly, not transposed.
    let config = RenderConfig {
        width: 6,
        height: 3,
        leftlower: Complex::new(-2.0, -1.0),
        rightupper: Complex::new(1.0, 1.0),
        max_iterations: 32,
        ..RenderConfig::default()
    };
    let image = Renderer::new(config).unwrap().render().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wide.ppm");
    image.dump(&path).unwrap();

    let reread = PpmImage::load(&path).unwrap();
    assert_eq!(reread.width(), 6);
    assert_eq!(reread.height(), 3);
    assert_eq!(reread, image);
}
