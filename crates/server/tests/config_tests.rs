use clap::Parser;
use std::collections::HashMap;
use std::path::PathBuf;

use gold_rupee_core::errors::CoreError;
use gold_rupee_core::models::settings::Settings;
use gold_rupee_server::cli::{Cli, Commands};
use gold_rupee_server::config::resolve_settings;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

// ═══════════════════════════════════════════════════════════════════
//  resolve_settings
// ═══════════════════════════════════════════════════════════════════

mod resolve {
    use super::*;

    #[test]
    fn defaults_without_env_or_flags() {
        let settings = resolve_settings(env(&[]), None, &[], None).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn env_overrides_defaults() {
        let settings = resolve_settings(
            env(&[("PORT", "8080"), ("GOLD_RUPEE_DATA_FILES", "a.json, b.json")]),
            None,
            &[],
            None,
        )
        .unwrap();
        assert_eq!(settings.port, 8080);
        assert_eq!(
            settings.data_files,
            vec![PathBuf::from("a.json"), PathBuf::from("b.json")]
        );
    }

    #[test]
    fn flags_override_env() {
        let settings = resolve_settings(
            env(&[("PORT", "8080"), ("PUBLIC_DIR", "/srv/www")]),
            Some(9000),
            &[PathBuf::from("flag.json")],
            Some(PathBuf::from("site")),
        )
        .unwrap();
        assert_eq!(settings.port, 9000);
        assert_eq!(settings.data_files, vec![PathBuf::from("flag.json")]);
        assert_eq!(settings.public_dir, PathBuf::from("site"));
    }

    #[test]
    fn zero_year_window_is_rejected() {
        let err = resolve_settings(env(&[("GOLD_RUPEE_WINDOW_YEARS", "0")]), None, &[], None)
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig(_)));
    }

    #[test]
    fn bad_port_names_the_variable() {
        let err = resolve_settings(env(&[("PORT", "eighty")]), None, &[], None).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  CLI parsing
// ═══════════════════════════════════════════════════════════════════

mod cli {
    use super::*;

    #[test]
    fn serve_accepts_repeated_data_files() {
        let cli = Cli::try_parse_from([
            "gold-rupee-server",
            "serve",
            "--port",
            "4000",
            "-f",
            "one.json",
            "--data-file",
            "two.json",
        ])
        .unwrap();
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.port, Some(4000));
                assert_eq!(args.data_files.len(), 2);
                assert!(args.public_dir.is_none());
            }
            other => panic!("expected serve, got {other:?}"),
        }
    }

    #[test]
    fn render_defaults() {
        let cli = Cli::try_parse_from(["gold-rupee-server", "render"]).unwrap();
        match cli.command {
            Commands::Render(args) => {
                assert!(args.url.is_none());
                assert_eq!(args.out, PathBuf::from("gold-rupee.svg"));
                assert_eq!((args.width, args.height), (1000, 500));
            }
            other => panic!("expected render, got {other:?}"),
        }
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["gold-rupee-server"]).is_err());
    }
}
