//! Validates pairing, parsing, graph construction, and the CLI pipeline

use slidereel::SlideshowError;
use slidereel::algorithm::graph::CostGraph;
use slidereel::algorithm::pairing::pair_photos;
use slidereel::io::cli::{Cli, FileProcessor, Strategy};
use slidereel::io::input::parse_dataset;
use slidereel::io::output::{render_slideshow, slideshow_score};
use slidereel::model::photo::{Orientation, Photo};
use slidereel::model::slide::Slide;
use slidereel::model::tags::TagSet;
use std::collections::HashSet;
use std::path::Path;

fn vertical(index: usize, tags: &[&str]) -> Photo {
    Photo::new(index, Orientation::Vertical, tags.iter().copied().collect())
}

fn horizontal(index: usize, tags: &[&str]) -> Photo {
    Photo::new(
        index,
        Orientation::Horizontal,
        tags.iter().copied().collect(),
    )
}

// Two tag-identical pairs: the greedy scan must cross-pair them so each
// merged slide holds all four tags
#[test]
fn test_pairing_prefers_most_diverse_partner() {
    let photos = vec![
        vertical(0, &["1", "2"]),
        vertical(1, &["3", "4"]),
        vertical(2, &["1", "2"]),
        vertical(3, &["3", "4"]),
    ];

    let slides = pair_photos(&photos).unwrap();
    assert_eq!(slides.len(), 2);
    for slide in &slides {
        assert_eq!(slide.photo_indices().len(), 2);
        assert_eq!(slide.tags().len(), 4);
    }
}

#[test]
fn test_pairing_consumes_each_photo_exactly_once() {
    let photos: Vec<Photo> = (0..20)
        .map(|i| {
            let tags: TagSet = (0..3).map(|k| format!("tag{}", (i * 7 + k) % 13)).collect();
            Photo::new(i, Orientation::Vertical, tags)
        })
        .collect();

    let slides = pair_photos(&photos).unwrap();
    assert_eq!(slides.len(), 10);

    let mut seen = HashSet::new();
    for slide in &slides {
        for &index in slide.photo_indices() {
            assert!(seen.insert(index), "photo {index} assigned twice");
        }
    }
    assert_eq!(seen.len(), 20, "some photos were left unassigned");
}

#[test]
fn test_pairing_fails_on_odd_input() {
    let photos = vec![
        vertical(0, &["a"]),
        vertical(1, &["b"]),
        vertical(2, &["c"]),
    ];

    match pair_photos(&photos) {
        Err(SlideshowError::PairingExhausted { unpaired }) => assert_eq!(unpaired, 1),
        other => unreachable!("expected PairingExhausted, got {other:?}"),
    }
}

#[test]
fn test_parse_dataset_reads_records_in_order() {
    let raw = "4\nH 3 cat beach sun\nV 2 selfie smile\nV 2 garden selfie\nH 2 garden cat\n";

    let photos = parse_dataset(raw).unwrap();
    assert_eq!(photos.len(), 4);

    let first = photos.first().unwrap();
    assert_eq!(first.index(), 0);
    assert_eq!(first.orientation(), Orientation::Horizontal);
    assert_eq!(first.tags().len(), 3);
    assert!(first.tags().contains("beach"));

    let second = photos.get(1).unwrap();
    assert_eq!(second.orientation(), Orientation::Vertical);
}

#[test]
fn test_parse_dataset_rejects_count_mismatch() {
    let raw = "3\nH 1 cat\nV 1 dog\n";

    match parse_dataset(raw) {
        Err(SlideshowError::PhotoCountMismatch { declared, actual }) => {
            assert_eq!(declared, 3);
            assert_eq!(actual, 2);
        }
        other => unreachable!("expected PhotoCountMismatch, got {other:?}"),
    }
}

#[test]
fn test_parse_dataset_rejects_malformed_records() {
    assert!(parse_dataset("1\nX 1 cat\n").is_err());
    assert!(parse_dataset("1\nH two cat\n").is_err());
    assert!(parse_dataset("1\nH 3 cat\n").is_err());
    assert!(parse_dataset("").is_err());
}

#[test]
fn test_cost_matrix_is_symmetric_with_zero_diagonal() {
    let raw = "4\nH 3 cat beach sun\nV 2 selfie smile\nV 2 garden selfie\nH 2 garden cat\n";
    let photos = parse_dataset(raw).unwrap();
    let slides: Vec<Slide> = photos
        .iter()
        .filter(|photo| !photo.is_vertical())
        .map(Slide::from_horizontal)
        .collect();
    let graph = CostGraph::build(slides);

    for i in 0..graph.node_count() {
        assert!(graph.cost(i, i).abs() < f64::EPSILON);
        for j in 0..graph.node_count() {
            assert!((graph.cost(i, j) - graph.cost(j, i)).abs() < f64::EPSILON);
        }
    }
}

#[test]
fn test_graph_construction_is_idempotent() {
    let slides: Vec<Slide> = (0..6)
        .map(|i| {
            let tags: TagSet = (0..4).map(|k| format!("t{}", (i + k * 2) % 9)).collect();
            Slide::from_horizontal(&Photo::new(i, Orientation::Horizontal, tags))
        })
        .collect();

    let first = CostGraph::build(slides.clone());
    let second = CostGraph::build(slides);

    for i in 0..first.node_count() {
        for j in 0..first.node_count() {
            assert_eq!(first.cost(i, j).to_bits(), second.cost(i, j).to_bits());
        }
    }
}

#[test]
fn test_render_and_score() {
    let slides = vec![
        Slide::from_horizontal(&horizontal(0, &["a", "b", "c"])),
        Slide::from_horizontal(&horizontal(1, &["b", "c", "d"])),
    ];
    let graph = CostGraph::build(slides);
    let route = vec![0, 1];

    assert_eq!(render_slideshow(&graph, &route), "2\n0\n1\n");
    assert_eq!(slideshow_score(&graph, &route), 1);
}

fn batch_cli(target: &Path) -> Cli {
    Cli {
        target: target.to_path_buf(),
        seed: 42,
        generations: 30,
        population_size: 20,
        elite_size: 4,
        mutation_rate: 0.02,
        strategy: Strategy::Genetic,
        quiet: true,
        no_skip: false,
    }
}

#[test]
fn test_end_to_end_dataset_processing() {
    let dir = tempfile::tempdir().unwrap();
    let dataset_path = dir.path().join("moments.txt");
    std::fs::write(
        &dataset_path,
        "4\nH 3 cat beach sun\nV 2 selfie smile\nV 2 garden selfie\nH 2 garden cat\n",
    )
    .unwrap();

    let mut processor = FileProcessor::new(batch_cli(&dataset_path));
    processor.process().unwrap();

    let output_path = dir.path().join("moments_slideshow.txt");
    let rendered = std::fs::read_to_string(&output_path).unwrap();
    let mut lines = rendered.lines();

    assert_eq!(lines.next(), Some("3"));
    let mut seen = HashSet::new();
    for line in lines {
        let ids: Vec<usize> = line
            .split_whitespace()
            .map(|field| field.parse().unwrap())
            .collect();
        assert!(ids.len() == 1 || ids.len() == 2);
        for id in ids {
            assert!(seen.insert(id), "photo {id} shown twice");
        }
    }
    assert_eq!(seen, (0..4).collect::<HashSet<usize>>());
}

#[test]
fn test_greedy_strategy_produces_full_ordering() {
    let dir = tempfile::tempdir().unwrap();
    let dataset_path = dir.path().join("pets.txt");
    std::fs::write(
        &dataset_path,
        "3\nH 2 dog park\nH 2 park ball\nH 2 ball dog\n",
    )
    .unwrap();

    let mut cli = batch_cli(&dataset_path);
    cli.strategy = Strategy::Greedy;
    let mut processor = FileProcessor::new(cli);
    processor.process().unwrap();

    let rendered = std::fs::read_to_string(dir.path().join("pets_slideshow.txt")).unwrap();
    assert_eq!(rendered.lines().count(), 4);
    assert_eq!(rendered.lines().next(), Some("3"));
}

#[test]
fn test_existing_output_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let dataset_path = dir.path().join("solo.txt");
    std::fs::write(&dataset_path, "1\nH 2 cat sun\n").unwrap();
    let output_path = dir.path().join("solo_slideshow.txt");
    std::fs::write(&output_path, "sentinel").unwrap();

    let mut processor = FileProcessor::new(batch_cli(&dataset_path));
    processor.process().unwrap();

    assert_eq!(std::fs::read_to_string(&output_path).unwrap(), "sentinel");
}
