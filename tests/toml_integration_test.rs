use qr_scad::utils::validation::Validate;
use qr_scad::{LocalStorage, ModelEngine, ScadPipeline, TomlConfig};
use tempfile::TempDir;

#[test]
fn test_toml_config_end_to_end() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("toml_model.scad");

    let config_path = dir.path().join("qrscad.toml");
    std::fs::write(
        &config_path,
        format!(
            r#"
            [model]
            text = "https://mihatama.com/"
            line_width = 1.0
            taper_angle = 0.0

            [output]
            filename = "{}"
            "#,
            output.to_str().unwrap()
        ),
    )
    .unwrap();

    let config = TomlConfig::from_file(&config_path).unwrap();
    config.validate().unwrap();

    let pipeline = ScadPipeline::new(LocalStorage::new(".".to_string()), &config);
    let path = ModelEngine::new(pipeline).run().unwrap();

    assert_eq!(path, output.to_str().unwrap());
    let doc = std::fs::read_to_string(&output).unwrap();
    assert!(doc.contains("line_width = 1.0;"));
    assert!(doc.contains("final_scale = 1;"));
}

#[test]
fn test_toml_config_missing_file_reports_io_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = TomlConfig::from_file(&missing).unwrap_err();
    assert!(matches!(err, qr_scad::ModelError::IoError(_)));
}
