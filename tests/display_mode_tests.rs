mod common;

use common::MockPlatform;
use window_context::core::{
    available_resolutions, filter_modes_by_aspect_ratio, get_available_resolutions,
    modes_to_resolutions, parse_aspect_ratio, parse_resolution,
};
use window_context::{
    AspectRatio, ParseError, RefreshMode, Resolution, WindowConfig, WindowContext,
    WindowError, WindowGeometry,
};

fn platform() -> MockPlatform {
    MockPlatform::new(WindowGeometry::new(0, 0, 800, 600))
}

#[test]
fn test_parse_aspect_ratio_examples() {
    assert_eq!(parse_aspect_ratio("16:9"), Some(AspectRatio::new(16, 9)));
    assert_eq!(parse_aspect_ratio("16:0"), None);
    assert_eq!(parse_aspect_ratio("abc"), None);
}

#[test]
fn test_filter_example() {
    let modes = [
        RefreshMode::new(1920, 1080, 60),
        RefreshMode::new(1280, 720, 60),
        RefreshMode::new(800, 600, 60),
    ];
    assert_eq!(
        filter_modes_by_aspect_ratio(&modes, parse_aspect_ratio("16:9")),
        vec![modes[0], modes[1]]
    );
}

#[test]
fn test_dedup_example() {
    let modes = [
        RefreshMode::new(1920, 1080, 60),
        RefreshMode::new(1920, 1080, 144),
        RefreshMode::new(1280, 720, 60),
    ];
    let resolutions = modes_to_resolutions(&modes);
    assert_eq!(resolutions.len(), 2);
    assert_eq!(resolutions[0].to_string(), "1920x1080");
    assert_eq!(resolutions[1].to_string(), "1280x720");
}

#[test]
fn test_full_catalog_in_monitor_order() {
    assert_eq!(
        get_available_resolutions(&platform(), None).unwrap(),
        vec![
            "2560x1440",
            "1920x1080",
            "1680x1050",
            "1280x1024",
            "1280x720",
            "800x600"
        ]
    );
}

#[test]
fn test_catalog_filtered_per_ratio() {
    let platform = platform();
    assert_eq!(
        get_available_resolutions(&platform, Some("16:9")).unwrap(),
        vec!["2560x1440", "1920x1080", "1280x720"]
    );
    assert_eq!(
        get_available_resolutions(&platform, Some("16:10")).unwrap(),
        vec!["1680x1050"]
    );
    assert_eq!(
        get_available_resolutions(&platform, Some("4:3")).unwrap(),
        vec!["800x600"]
    );
    assert!(get_available_resolutions(&platform, Some("1:1"))
        .unwrap()
        .is_empty());
}

#[test]
fn test_invalid_ratio_is_an_error_not_a_silent_fallback() {
    assert_eq!(
        get_available_resolutions(&platform(), Some("16/9")),
        Err(ParseError::InvalidAspectRatio("16/9".to_string()))
    );
}

#[test]
fn test_typed_catalog_matches_string_catalog() {
    let platform = platform();
    let typed: Vec<String> = available_resolutions(&platform, Some(AspectRatio::new(16, 9)))
        .iter()
        .map(Resolution::to_string)
        .collect();
    assert_eq!(
        typed,
        get_available_resolutions(&platform, Some("16:9")).unwrap()
    );
}

#[test]
fn test_no_monitor_gives_empty_catalog() {
    let platform = MockPlatform::without_monitor(WindowGeometry::new(0, 0, 800, 600));
    assert_eq!(
        get_available_resolutions(&platform, Some("16:9")),
        Ok(Vec::new())
    );
}

#[test]
fn test_catalog_entries_parse_back() {
    for entry in get_available_resolutions(&platform(), None).unwrap() {
        let resolution = parse_resolution(&entry).unwrap();
        assert_eq!(resolution.to_string(), entry);
    }
}

#[test]
fn test_runtime_resize_through_context() {
    let mut context = WindowContext::new(platform(), &WindowConfig::default()).unwrap();

    assert_eq!(
        context.set_resolution("1680x1050"),
        Ok(Resolution::new(1680, 1050))
    );
    assert_eq!(context.platform().geometry.get().width, 1680);

    let err = context.set_resolution("1680 by 1050").unwrap_err();
    assert!(matches!(err, WindowError::Parse(ParseError::MissingSeparator(_))));
    assert_eq!(context.platform().geometry.get().width, 1680);
}
