//! Exact-count segmentation regression test
//!
//! End to end: SLIC over synthetic images must come back with exactly the
//! requested number of regions, every pixel labeled, and each region
//! connected.

use exactseg_core::{Image, LabelMap};
use exactseg_count::{
    ExactSegmentOptions, SegmentError, SegmentResult, compute_exact_segmentation,
    compute_exact_segmentation_with_report, exact_num_superpixels,
};
use exactseg_region::{ConnectivityType, all_regions_connected, label_areas};
use exactseg_slic::{Slic, SlicOptions};
use exactseg_test::{RegParams, blocks_image, gradient_image, noise_image};
use std::cell::Cell;

fn check_exact(rp: &mut RegParams, image: &Image, labels: &LabelMap, desired: usize) {
    rp.compare_values(desired as f64, labels.num_labels() as f64, 0.0);
    rp.check(labels.dimensions() == image.dimensions(), "label map shape");
    let covered: u32 = label_areas(labels).values().sum();
    rp.compare_values(image.pixel_count() as f64, covered as f64, 0.0);
    rp.check(
        all_regions_connected(labels, ConnectivityType::EightWay),
        "regions connected",
    );
}

#[test]
fn exact_reg() {
    let mut rp = RegParams::new("exact");
    let slic = Slic::new(SlicOptions::with_tuning(10.0, 0.0)).expect("slic");
    let options = ExactSegmentOptions::default();

    // --- Test 1: gray blocks ---
    eprintln!("=== Blocks 32x32 ===");
    let blocks = blocks_image(32, 32, 8, 0.05, 3).expect("blocks");
    for desired in [1, 3, 8, 16, 40] {
        let report = compute_exact_segmentation_with_report(&blocks, desired, &slic, &options)
            .expect("blocks exact");
        check_exact(&mut rp, &blocks, &report.labels, desired);
        rp.compare_values(
            (report.inflated_count - desired) as f64,
            report.merges.len() as f64,
            0.0,
        );
        eprintln!(
            "  desired {}: {} attempts, inflated to {}, {} merges",
            desired,
            report.attempts,
            report.inflated_count,
            report.merges.len()
        );
    }

    // --- Test 2: color noise, with smoothing ---
    eprintln!("=== Noise 24x24 RGB ===");
    let noise = noise_image(24, 24, 3, 42).expect("noise");
    let smooth = Slic::new(SlicOptions::with_tuning(20.0, 1.0)).expect("slic");
    for desired in [5, 20] {
        let labels =
            compute_exact_segmentation(&noise, desired, &smooth, &options).expect("noise exact");
        check_exact(&mut rp, &noise, &labels, desired);
    }

    // --- Test 3: determinism ---
    let first = compute_exact_segmentation(&noise, 7, &smooth, &options).expect("first run");
    let second = compute_exact_segmentation(&noise, 7, &smooth, &options).expect("second run");
    rp.compare_label_maps(&first, &second);

    // --- Test 4: convenience entry and sequential labels ---
    eprintln!("=== Convenience entry ===");
    let gradient = gradient_image(30, 10).expect("gradient");
    let labels = exact_num_superpixels(&gradient, 6, 10.0, 0.5).expect("exact_num_superpixels");
    check_exact(&mut rp, &gradient, &labels, 6);

    let sequential = ExactSegmentOptions {
        relabel_sequential: true,
        ..ExactSegmentOptions::default()
    };
    let labels =
        compute_exact_segmentation(&gradient, 6, &slic, &sequential).expect("sequential");
    let mut distinct = labels.distinct_labels();
    distinct.sort_unstable();
    rp.check(distinct == vec![1, 2, 3, 4, 5, 6], "labels renumbered 1..=6");

    // --- Test 5: one region per pixel ---
    let tiny = noise_image(3, 2, 1, 5).expect("tiny");
    let labels = compute_exact_segmentation(&tiny, 6, &slic, &options).expect("per pixel");
    check_exact(&mut rp, &tiny, &labels, 6);

    // --- Test 6: preconditions are checked before the generator runs ---
    eprintln!("=== Preconditions ===");
    let calls = Cell::new(0u32);
    let counting = |image: &Image, n: u32| -> SegmentResult<LabelMap> {
        calls.set(calls.get() + 1);
        Ok(slic.segment(image, n)?)
    };
    for desired in [0, blocks.pixel_count() + 1] {
        rp.check(
            matches!(
                compute_exact_segmentation(&blocks, desired, &counting, &options),
                Err(SegmentError::Precondition(_))
            ),
            "precondition rejected",
        );
    }
    let empty = Image::new(0, 0, 1).expect("empty");
    rp.check(
        matches!(
            compute_exact_segmentation(&empty, 1, &counting, &options),
            Err(SegmentError::Precondition(_))
        ),
        "empty image rejected",
    );
    rp.compare_values(0.0, calls.get() as f64, 0.0);

    assert!(rp.cleanup(), "exact regression test failed");
}
