//! Integration tests for Brewtagger

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use tempfile::TempDir;

    fn brewtagger() -> Command {
        cargo_bin_cmd!("brewtagger")
    }

    #[test]
    fn help_displays() {
        brewtagger()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Tag Homebrew and App Store apps"));
    }

    #[test]
    fn version_displays() {
        brewtagger()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("brewtagger version"));
    }

    #[test]
    fn unknown_flag_is_usage_error() {
        brewtagger()
            .args(["-tag-colour", "Red"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Usage"));
    }

    #[test]
    fn tag_options_rejected_for_other_commands() {
        brewtagger()
            .args(["--tag-color", "Red", "launchd"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("only apply to the tag command"));
    }

    #[test]
    fn config_path_honors_flag() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        brewtagger()
            .args(["config", "path", "--config"])
            .arg(&path)
            .assert()
            .success()
            .stdout(predicate::str::contains("custom.toml"));
    }

    #[test]
    fn config_show_defaults() {
        let temp = TempDir::new().unwrap();
        brewtagger()
            .args(["config", "show", "--config"])
            .arg(temp.path().join("missing.toml"))
            .assert()
            .success()
            .stdout(predicate::str::contains("[tagging]"))
            .stdout(predicate::str::contains("Yellow"));
    }

    #[test]
    fn invalid_config_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[tagging\n").unwrap();
        brewtagger()
            .args(["config", "show", "--config"])
            .arg(&path)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Invalid configuration"));
    }

    #[test]
    fn launchd_prints_plist() {
        brewtagger()
            .args(["launchd", "--interval", "600"])
            .assert()
            .success()
            .stdout(predicate::str::contains("com.github.dewey.brewtagger"))
            .stdout(predicate::str::contains("<integer>600</integer>"));
    }
}

/// End-to-end runs against shell-script stand-ins for brew, mas and tag
#[cfg(unix)]
mod tagging_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    struct Fixture {
        temp: TempDir,
        config: PathBuf,
        apps: PathBuf,
        tag_log: PathBuf,
    }

    fn write_script(path: &Path, body: &str) {
        std::fs::write(path, format!("#!/bin/sh\n{body}")).unwrap();
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    /// `brew` knows casks foo (Foo.app) and broken (malformed JSON);
    /// `mas` lists Bar; `tag` records adds in a log and reports them on --list.
    fn fixture(apps_dir_exists: bool) -> Fixture {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        let apps = temp.path().join("Applications");
        let tag_log = temp.path().join("tag.log");
        std::fs::create_dir(&bin).unwrap();
        if apps_dir_exists {
            std::fs::create_dir(&apps).unwrap();
            for name in ["Foo.app", "Bar.app", "Baz.app"] {
                std::fs::create_dir(apps.join(name)).unwrap();
            }
        }

        write_script(
            &bin.join("brew"),
            r#"case "$1 $2" in
  "list --formula") echo "mas" ;;
  "list --cask") printf 'foo\nbroken\n' ;;
  "info --json=v2")
    if [ "$4" = "foo" ]; then
      echo '{"casks":[{"name":["Foo"],"artifacts":[{"app":["Foo.app"]}]}]}'
    else
      echo 'not json'
    fi ;;
  *) exit 1 ;;
esac
"#,
        );
        write_script(
            &bin.join("mas"),
            "printf '1365531024  Bar  (6.1.3)\\n42\\n'\n",
        );
        write_script(
            &bin.join("tag"),
            &format!(
                r#"LOG='{log}'
case "$1" in
  --list) grep -F "$2" "$LOG" 2>/dev/null | cut -f1 ;;
  --add) printf '%s\t%s\n' "$2" "$3" >> "$LOG" ;;
  *) exit 1 ;;
esac
"#,
                log = tag_log.display()
            ),
        );

        let config = temp.path().join("config.toml");
        std::fs::write(
            &config,
            format!(
                r#"[tools]
brew = "{bin}/brew"
mas = "{bin}/mas"
tag = "{bin}/tag"

[tagging]
applications_dir = "{apps}"
"#,
                bin = bin.display(),
                apps = apps.display()
            ),
        )
        .unwrap();

        Fixture {
            temp,
            config,
            apps,
            tag_log,
        }
    }

    fn brewtagger(fixture: &Fixture) -> Command {
        let mut cmd = cargo_bin_cmd!("brewtagger");
        cmd.arg("--config").arg(&fixture.config);
        cmd.current_dir(fixture.temp.path());
        cmd
    }

    fn tag_adds(fixture: &Fixture) -> Vec<String> {
        std::fs::read_to_string(&fixture.tag_log)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn tags_cask_and_store_apps_once() {
        let fixture = fixture(true);

        brewtagger(&fixture)
            .assert()
            .success()
            .stdout(predicate::str::contains("Tagging"))
            .stdout(predicate::str::contains("Skipping cask"));

        let adds = tag_adds(&fixture);
        assert_eq!(adds.len(), 2, "{adds:?}");
        assert!(adds.contains(&format!("Yellow\t{}", fixture.apps.join("Foo.app").display())));
        assert!(adds.contains(&format!("Blue\t{}", fixture.apps.join("Bar.app").display())));
        assert!(!adds.iter().any(|a| a.contains("Baz.app")));
    }

    #[test]
    fn second_run_is_idempotent() {
        let fixture = fixture(true);

        brewtagger(&fixture).arg("tag").assert().success();
        brewtagger(&fixture)
            .arg("tag")
            .assert()
            .success()
            .stdout(predicate::str::contains("already tagged"));

        assert_eq!(tag_adds(&fixture).len(), 2);
    }

    #[test]
    fn single_tag_color() {
        let fixture = fixture(true);

        brewtagger(&fixture)
            .args(["--tag-color", "Green"])
            .assert()
            .success();

        let adds = tag_adds(&fixture);
        assert_eq!(adds.len(), 2);
        assert!(adds.iter().all(|a| a.starts_with("Green\t")));
    }

    #[test]
    fn single_dash_tag_color() {
        let fixture = fixture(true);

        brewtagger(&fixture)
            .args(["-tag-color", "Red"])
            .assert()
            .success();

        let adds = tag_adds(&fixture);
        assert_eq!(adds.len(), 2, "{adds:?}");
        assert!(adds.iter().all(|a| a.starts_with("Red\t")));
    }

    #[test]
    fn dry_run_before_tag_subcommand() {
        let fixture = fixture(true);

        brewtagger(&fixture)
            .args(["--dry-run", "tag"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Would tag"));

        assert!(tag_adds(&fixture).is_empty());
    }

    #[test]
    fn dry_run_tags_nothing() {
        let fixture = fixture(true);

        brewtagger(&fixture)
            .args(["tag", "--dry-run"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Would tag"));

        assert!(tag_adds(&fixture).is_empty());
    }

    #[test]
    fn missing_applications_dir_fails_without_tagging() {
        let fixture = fixture(false);

        brewtagger(&fixture)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to list"));

        assert!(tag_adds(&fixture).is_empty());
    }

    #[test]
    fn list_outputs_json() {
        let fixture = fixture(true);

        brewtagger(&fixture)
            .args(["list", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""casks": ["#))
            .stdout(predicate::str::contains(r#""Foo.app""#))
            .stdout(predicate::str::contains(r#""Bar""#));
    }
}
