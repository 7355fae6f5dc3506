//! End-to-end dataset normalization scenarios on scratch directories.

use std::path::{Path, PathBuf};

use dataprep_core::pipeline::FileDiscovery;
use dataprep_core::{Config, NoProgress, Normalizer, PipelineError};
use image::{DynamicImage, GenericImageView, GrayImage, ImageFormat, Luma, Rgb, RgbImage};

fn config(size: u32) -> Config {
    let mut config = Config::default();
    config.output.size = size;
    config
}

fn make_dir(root: &Path, name: &str) -> PathBuf {
    let dir = root.join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn save(img: DynamicImage, path: &Path, format: ImageFormat) {
    img.save_with_format(path, format).unwrap();
}

fn list(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[tokio::test]
async fn cat_and_dog_become_square_rgb() {
    let root = tempfile::tempdir().unwrap();
    let train = make_dir(root.path(), "train");
    save(
        DynamicImage::ImageLuma8(GrayImage::from_pixel(64, 64, Luma([120]))),
        &train.join("cat.png"),
        ImageFormat::Png,
    );
    save(
        DynamicImage::ImageRgb8(RgbImage::from_pixel(200, 100, Rgb([200, 40, 40]))),
        &train.join("dog.jpg"),
        ImageFormat::Jpeg,
    );

    let normalizer = Normalizer::new(&config(384));
    let reports = normalizer
        .normalize_all(&[train], &mut NoProgress)
        .await
        .unwrap();

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].written, 2);

    let out_dir = root.path().join("train_384");
    assert_eq!(list(&out_dir), vec!["cat.jpg", "dog.jpg"]);
    for name in ["cat.jpg", "dog.jpg"] {
        let img = image::open(out_dir.join(name)).unwrap();
        assert_eq!(img.dimensions(), (384, 384));
        assert_eq!(img.color(), image::ColorType::Rgb8);
    }
}

#[tokio::test]
async fn second_run_writes_nothing() {
    let root = tempfile::tempdir().unwrap();
    let train = make_dir(root.path(), "train");
    for i in 0..3 {
        save(
            DynamicImage::new_rgb8(10 + i, 20),
            &train.join(format!("img{i}.png")),
            ImageFormat::Png,
        );
    }

    let normalizer = Normalizer::new(&config(32));
    let first = normalizer
        .normalize_all(&[train.clone()], &mut NoProgress)
        .await
        .unwrap();
    let out_dir = root.path().join("train_32");
    let before = list(&out_dir);
    let modified: Vec<_> = before
        .iter()
        .map(|n| std::fs::metadata(out_dir.join(n)).unwrap().modified().unwrap())
        .collect();

    let second = normalizer
        .normalize_all(&[train], &mut NoProgress)
        .await
        .unwrap();

    assert_eq!(first[0].written, 3);
    assert_eq!(second[0].written, 0);
    assert_eq!(second[0].skipped, 3);
    assert_eq!(list(&out_dir), before);
    let modified_after: Vec<_> = before
        .iter()
        .map(|n| std::fs::metadata(out_dir.join(n)).unwrap().modified().unwrap())
        .collect();
    assert_eq!(modified, modified_after);
}

#[tokio::test]
async fn empty_input_creates_empty_output() {
    let root = tempfile::tempdir().unwrap();
    let train = make_dir(root.path(), "train");

    let reports = Normalizer::new(&config(384))
        .normalize_all(&[train], &mut NoProgress)
        .await
        .unwrap();

    assert_eq!(reports[0].total, 0);
    let out_dir = root.path().join("train_384");
    assert!(out_dir.is_dir());
    assert!(list(&out_dir).is_empty());
}

#[tokio::test]
async fn stem_collision_keeps_first_enumerated() {
    let root = tempfile::tempdir().unwrap();
    let train = make_dir(root.path(), "train");
    save(
        DynamicImage::ImageRgb8(RgbImage::from_pixel(16, 16, Rgb([255, 0, 0]))),
        &train.join("a.png"),
        ImageFormat::Png,
    );
    save(
        DynamicImage::ImageRgb8(RgbImage::from_pixel(16, 16, Rgb([0, 0, 255]))),
        &train.join("a.bmp"),
        ImageFormat::Bmp,
    );

    let first_name = FileDiscovery::discover(&train).unwrap()[0]
        .file_name()
        .unwrap()
        .to_string_lossy()
        .into_owned();

    let reports = Normalizer::new(&config(16))
        .normalize_all(&[train], &mut NoProgress)
        .await
        .unwrap();

    assert_eq!(reports[0].written, 1);
    assert_eq!(reports[0].skipped, 1);

    let out_dir = root.path().join("train_16");
    assert_eq!(list(&out_dir), vec!["a.jpg"]);
    let px = image::open(out_dir.join("a.jpg")).unwrap().to_rgb8();
    let Rgb([r, _, b]) = *px.get_pixel(8, 8);
    if first_name == "a.png" {
        assert!(r > 200 && b < 60, "expected red, got {:?}", px.get_pixel(8, 8));
    } else {
        assert!(b > 200 && r < 60, "expected blue, got {:?}", px.get_pixel(8, 8));
    }
}

#[tokio::test]
async fn corrupt_file_halts_before_second_dataset() {
    let root = tempfile::tempdir().unwrap();
    let train = make_dir(root.path(), "train");
    let test = make_dir(root.path(), "test");

    let mut png = std::io::Cursor::new(Vec::new());
    DynamicImage::new_rgb8(64, 64)
        .write_to(&mut png, ImageFormat::Png)
        .unwrap();
    let mut bytes = png.into_inner();
    bytes.truncate(bytes.len() / 2);
    std::fs::write(train.join("broken.png"), &bytes).unwrap();
    save(DynamicImage::new_rgb8(8, 8), &test.join("ok.png"), ImageFormat::Png);

    let err = Normalizer::new(&config(32))
        .normalize_all(&[train.clone(), test], &mut NoProgress)
        .await
        .unwrap_err();

    assert!(matches!(err, PipelineError::Decode { .. }));
    assert_eq!(err.path(), train.join("broken.png"));
    assert!(!root.path().join("train_32").join("broken.jpg").exists());
    assert!(!root.path().join("train_32").join("broken.jpg.part").exists());
    assert!(!root.path().join("test_32").exists());
}

#[tokio::test]
async fn train_and_test_are_independent() {
    let root = tempfile::tempdir().unwrap();
    let data = make_dir(root.path(), "data");
    let train = make_dir(&data, "train");
    let test = make_dir(&data, "test");
    save(DynamicImage::new_rgb8(30, 40), &train.join("x.png"), ImageFormat::Png);
    save(DynamicImage::new_rgb8(30, 40), &test.join("y.bmp"), ImageFormat::Bmp);

    let reports = Normalizer::new(&config(48))
        .normalize_all(&[train, test], &mut NoProgress)
        .await
        .unwrap();

    assert_eq!(reports.len(), 2);
    assert_eq!(list(&data.join("train_48")), vec!["x.jpg"]);
    assert_eq!(list(&data.join("test_48")), vec!["y.jpg"]);
}

#[tokio::test]
async fn tga_input_is_normalized() {
    let root = tempfile::tempdir().unwrap();
    let train = make_dir(root.path(), "train");
    save(
        DynamicImage::ImageRgb8(RgbImage::from_pixel(10, 10, Rgb([0, 200, 0]))),
        &train.join("pic.tga"),
        ImageFormat::Tga,
    );

    let reports = Normalizer::new(&config(384))
        .normalize_all(&[train], &mut NoProgress)
        .await
        .unwrap();

    assert_eq!(reports[0].written, 1);
    let img = image::open(root.path().join("train_384").join("pic.jpg")).unwrap();
    assert_eq!(img.dimensions(), (384, 384));
    assert_eq!(img.color(), image::ColorType::Rgb8);
}

#[tokio::test]
async fn subdirectory_entry_halts_the_run() {
    let root = tempfile::tempdir().unwrap();
    let train = make_dir(root.path(), "train");
    make_dir(&train, "nested");

    let err = Normalizer::new(&config(32))
        .normalize_all(&[train.clone()], &mut NoProgress)
        .await
        .unwrap_err();

    assert!(matches!(err, PipelineError::Read { .. }));
    assert_eq!(err.path(), train.join("nested"));
    assert!(list(&root.path().join("train_32")).is_empty());
}

#[cfg(unix)]
#[tokio::test]
async fn dangling_symlink_fails_at_its_entry() {
    let root = tempfile::tempdir().unwrap();
    let train = make_dir(root.path(), "train");
    std::os::unix::fs::symlink(root.path().join("gone.png"), train.join("link.png")).unwrap();

    let err = Normalizer::new(&config(32))
        .normalize_all(&[train.clone()], &mut NoProgress)
        .await
        .unwrap_err();

    assert!(matches!(err, PipelineError::Read { .. }));
    assert_eq!(err.path(), train.join("link.png"));
    // Enumeration succeeded, so the output directory was already set up
    assert!(root.path().join("train_32").is_dir());
}
