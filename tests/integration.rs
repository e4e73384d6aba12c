// SPDX-License-Identifier: MPL-2.0
use iced_gallery::catalog::Catalog;
use iced_gallery::config::{self, Config};
use iced_gallery::i18n::fluent::I18n;
use iced_gallery::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        theme_mode: ThemeMode::System,
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        theme_mode: ThemeMode::System,
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("viewer-close"), "Fermer");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn cli_flag_overrides_config_language() {
    let config = Config {
        language: Some("en-US".to_string()),
        theme_mode: ThemeMode::System,
    };
    let i18n = I18n::new(Some("fr".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "fr");
}

#[test]
fn theme_mode_round_trips_through_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        language: None,
        theme_mode: ThemeMode::Dark,
    };
    config::save_to_path(&config, &path).expect("Failed to write config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded.theme_mode, ThemeMode::Dark);
}

#[test]
fn bundled_catalog_is_fixed_and_ordered() {
    let catalog = Catalog::bundled();
    assert_eq!(catalog.len(), 5);

    let names: Vec<&str> = catalog.iter().map(|entry| entry.id().name()).collect();
    assert_eq!(
        names,
        [
            "nature1.png",
            "nature2.png",
            "nature3.png",
            "nature4.png",
            "nature5.png"
        ]
    );

    // Positional and identifier lookup agree.
    for (index, entry) in catalog.iter().enumerate() {
        assert_eq!(catalog.position(entry.id()), Some(index));
    }
}
