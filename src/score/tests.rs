use super::*;
use approx::assert_abs_diff_eq;

#[test]
fn test_load_scores() {
    let scores = load_scores("[0.1, -0.2, 0.3]".as_bytes()).unwrap();
    assert_eq!(scores, vec![0.1, -0.2, 0.3]);

    let scores = load_scores(" [1, 2.5e-1]\n".as_bytes()).unwrap();
    assert_eq!(scores, vec![1.0, 0.25]);
}

#[test]
fn test_load_scores_malformed() {
    for bad in ["", "[0.1, ", "{\"a\": 1}", "[[0.1], [0.2]]", "[\"x\"]", "0.5"] {
        assert!(
            matches!(load_scores(bad.as_bytes()), Err(ScoreError::Malformed(_))),
            "{bad}"
        );
    }
    assert!(matches!(load_scores("[]".as_bytes()), Err(ScoreError::Empty)));
}

#[test]
fn test_load_scores_missing_file() {
    match load_scores_from_file("no/such/scores.json") {
        Err(ScoreError::Io { path, .. }) => assert!(path.ends_with("scores.json")),
        other => panic!("期望 Io 错误，得到 {other:?}"),
    }
}

#[test]
fn test_moving_mean() {
    let smoothed = moving_mean(&[1., 2., 3., 4., 5.], 2).unwrap();
    assert_eq!(smoothed.len(), 4);
    for (s, e) in smoothed.iter().zip([1.5, 2.5, 3.5, 4.5]) {
        assert_abs_diff_eq!(*s, e, epsilon = 1e-12);
    }

    assert_eq!(moving_mean(&[1., 2., 3.], 1).unwrap(), vec![1., 2., 3.]);
    let whole = moving_mean(&[1., 2., 3., 6.], 4).unwrap();
    assert_eq!(whole.len(), 1);
    assert_abs_diff_eq!(whole[0], 3.0, epsilon = 1e-12);
}

#[test]
fn test_moving_mean_invalid_window() {
    let data = [1., 2., 3.];
    for window in [0, -1, 4, i64::MIN] {
        match moving_mean(&data, window) {
            Err(ScoreError::InvalidWindow { window: w, len }) => {
                assert_eq!(w, window);
                assert_eq!(len, 3);
            }
            other => panic!("期望 InvalidWindow，得到 {other:?}"),
        }
    }
}

#[test]
fn test_prepare_scores() {
    let raw = prepare_scores("[1, 2, 3, 4, 5]".as_bytes(), None).unwrap();
    assert_eq!(raw.len(), 5);

    let smoothed = prepare_scores("[1, 2, 3, 4, 5]".as_bytes(), Some(3)).unwrap();
    assert_eq!(smoothed.len(), 3);
    assert_abs_diff_eq!(smoothed[0], 2.0, epsilon = 1e-12);

    assert!(matches!(
        prepare_scores("[1, 2]".as_bytes(), Some(3)),
        Err(ScoreError::InvalidWindow { .. })
    ));
}

#[test]
fn test_project_clips_to_y_range() {
    let config = PlotConfig::default();
    let (left, top, right, bottom) = config.plot_area();

    assert_eq!(config.project(0, 3, 1.2), (left, top));
    assert_eq!(config.project(2, 3, -1.2), (right, bottom));
    // 超出范围的值被截断到边界
    assert_eq!(config.project(1, 3, 5.0).1, top);
    assert_eq!(config.project(1, 3, -5.0).1, bottom);
    assert_eq!(config.project(1, 3, 0.0), ((left + right) / 2.0, (top + bottom) / 2.0));
    // 单个点居中
    assert_eq!(config.project(0, 1, 0.0).0, (left + right) / 2.0);
}

#[test]
fn test_render() {
    let config = PlotConfig::default();
    let image = config.render(&[0.0, 0.0, 0.0]);
    assert_eq!(image.dimensions(), (config.width, config.height));

    // 零值水平线穿过绘图区中心
    let center = image.get_pixel(config.width / 2, config.height / 2);
    assert_eq!(*center, config.line_color);
    // 四角留白保持背景色
    assert_eq!(*image.get_pixel(1, 1), config.background);

    // 超出上界的值画在绘图区顶边上
    let image = config.render(&[3.0, 3.0]);
    assert_eq!(*image.get_pixel(config.width / 2, config.margin), config.line_color);
}

#[test]
fn test_save_to_missing_dir() {
    let result = PlotConfig::default().save(&[0.1], "no/such/dir/plot.png");
    assert!(matches!(result, Err(ScoreError::Render(_))));
}
