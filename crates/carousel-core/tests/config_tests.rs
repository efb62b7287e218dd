// Host-side tests for configuration defaults and attribute overrides.

use carousel_core::*;

#[test]
fn defaults_match_host_page() {
    let cfg = CarouselConfig::default();
    assert_eq!(cfg.viewport_width, 640.0);
    assert_eq!(cfg.viewport_height, 400.0);
    assert_eq!(cfg.images.len(), 4);
    assert_eq!(cfg.images[0], "images/0.jpg");
    let vp = cfg.viewport().unwrap();
    assert_eq!((vp.width(), vp.height()), (640.0, 400.0));
}

#[test]
fn overrides_replace_dimensions_and_images() {
    let cfg = CarouselConfig::default()
        .with_overrides(Some(" 800 "), Some("450.5"), Some("a.png, b.png,,c.png "))
        .unwrap();
    assert_eq!(cfg.viewport_width, 800.0);
    assert_eq!(cfg.viewport_height, 450.5);
    assert_eq!(cfg.images, vec!["a.png", "b.png", "c.png"]);
}

#[test]
fn missing_overrides_keep_defaults() {
    let cfg = CarouselConfig::default().with_overrides(None, None, None).unwrap();
    assert_eq!(cfg, CarouselConfig::default());
}

#[test]
fn malformed_values_are_config_errors() {
    let err = CarouselConfig::default()
        .with_overrides(Some("wide"), None, None)
        .unwrap_err();
    assert!(matches!(err, CarouselError::InvalidConfig(_)));

    let empty = CarouselConfig::default()
        .with_overrides(None, None, Some(" , "))
        .unwrap();
    assert!(matches!(empty.viewport(), Err(CarouselError::InvalidConfig(_))));

    let zero = CarouselConfig::default()
        .with_overrides(Some("0"), None, None)
        .unwrap();
    assert!(zero.viewport().is_err());
}
