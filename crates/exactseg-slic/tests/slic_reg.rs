//! SLIC superpixel regression test
//!
//! Runs SLIC over synthetic gray and color images and checks coverage,
//! connectivity and how closely the region count follows the request.

use exactseg_core::Image;
use exactseg_region::{ConnectivityType, all_regions_connected};
use exactseg_slic::colorspace::srgb_to_lab;
use exactseg_slic::smooth::gaussian_kernel;
use exactseg_slic::{Slic, SlicError, SlicOptions, slic};
use exactseg_test::{RegParams, blocks_image, gradient_image, noise_image};

#[test]
fn slic_reg() {
    let mut rp = RegParams::new("slic");
    let options = SlicOptions::default();

    // --- Test 1: gray blocks, count follows the request ---
    eprintln!("=== Blocks 48x48 ===");
    let blocks = blocks_image(48, 48, 12, 0.02, 9).expect("blocks");
    let mut previous = 0;
    for n in [4, 16, 36, 64] {
        let labels = slic(&blocks, n, &options).expect("slic blocks");
        let count = labels.num_labels();
        eprintln!("  requested {}, got {}", n, count);

        rp.check(labels.dimensions() == (48, 48), "shape");
        rp.check(labels.data().iter().all(|&l| l >= 1), "labels start at 1");
        rp.check(
            all_regions_connected(&labels, ConnectivityType::FourWay),
            "regions 4-connected",
        );
        let ratio = count as f64 / n as f64;
        rp.check((0.5..=2.0).contains(&ratio), "count near request");
        rp.check(count >= previous, "count grows with request");
        previous = count;
    }

    // --- Test 2: RGB noise with smoothing ---
    eprintln!("=== Noise 30x20 RGB ===");
    let noise = noise_image(30, 20, 3, 17).expect("noise");
    let smooth = Slic::new(SlicOptions::with_tuning(20.0, 1.0)).expect("slic");
    let labels = smooth.segment(&noise, 24).expect("slic noise");
    rp.check(labels.dimensions() == (30, 20), "shape");
    rp.check(
        all_regions_connected(&labels, ConnectivityType::FourWay),
        "regions 4-connected",
    );
    let again = smooth.segment(&noise, 24).expect("slic noise again");
    rp.compare_label_maps(&labels, &again);

    // --- Test 3: without connectivity enforcement labels are cluster ids ---
    let raw = SlicOptions {
        enforce_connectivity: false,
        ..SlicOptions::default()
    };
    let gradient = gradient_image(40, 10).expect("gradient");
    let labels = slic(&gradient, 8, &raw).expect("slic raw");
    rp.check(labels.num_labels() <= 8, "at most one label per seed");

    // --- Test 4: helpers ---
    let (l, a, b) = srgb_to_lab(1.0, 1.0, 1.0);
    rp.compare_values(100.0, l as f64, 0.05);
    rp.compare_values(0.0, a as f64, 0.05);
    rp.compare_values(0.0, b as f64, 0.05);
    let kernel = gaussian_kernel(1.0).expect("kernel");
    rp.compare_values(9.0, kernel.len() as f64, 0.0);
    rp.compare_values(1.0, kernel.iter().sum::<f32>() as f64, 1e-5);

    // --- Test 5: invalid input ---
    eprintln!("=== Errors ===");
    let empty = Image::new(0, 5, 3).expect("empty");
    rp.check(
        matches!(slic(&empty, 4, &options), Err(SlicError::EmptyImage)),
        "empty image",
    );
    rp.check(
        matches!(
            slic(&blocks, 0, &options),
            Err(SlicError::InvalidParameters(_))
        ),
        "zero segments",
    );
    for bad in [
        SlicOptions::with_tuning(0.0, 0.0),
        SlicOptions::with_tuning(10.0, -1.0),
        SlicOptions {
            max_iterations: 0,
            ..SlicOptions::default()
        },
    ] {
        rp.check(
            matches!(Slic::new(bad), Err(SlicError::InvalidParameters(_))),
            "invalid options rejected",
        );
    }

    assert!(rp.cleanup(), "slic regression test failed");
}
