//! Specs for localized default titles via `GN_CATALOG`.

use crate::prelude::*;

#[test]
fn catalog_translates_default_title() {
    let project = Project::empty();
    let catalog = project.file("i18n/de.toml", "Error = \"Fehler\"\nWarning = \"Warnung\"\n");

    cli()
        .args(&["error", "Festplatte voll"])
        .env("GN_CATALOG", &catalog)
        .exits(1)
        .stderr_eq("error: Fehler\nFestplatte voll\n");

    cli()
        .args(&["warning", "Achtung"])
        .env("GN_CATALOG", &catalog)
        .passes()
        .stderr_has("warning: Warnung\n");
}

#[test]
fn catalog_does_not_touch_explicit_title() {
    let project = Project::empty();
    let catalog = project.file("de.toml", "Error = \"Fehler\"\n");

    cli()
        .args(&["error", "--title", "Error", "m"])
        .env("GN_CATALOG", &catalog)
        .exits(1)
        .stderr_has("error: Error\n");
}

#[test]
fn missing_catalog_falls_back_to_untranslated() {
    let project = Project::empty();

    cli()
        .args(&["error", "--exit-code", "3", "Disk full"])
        .env("GN_CATALOG", project.path().join("missing.toml"))
        .exits(3)
        .stderr_has("failed to load catalog from GN_CATALOG")
        .stderr_has("error: Error\nDisk full\n");
}

#[test]
fn invalid_catalog_falls_back_to_untranslated() {
    let project = Project::empty();
    let catalog = project.file("bad.toml", "Error = 3\n");

    cli()
        .args(&["error", "Disk full"])
        .env("GN_CATALOG", &catalog)
        .exits(1)
        .stderr_has("invalid catalog")
        .stderr_has("error: Error\n");
}
