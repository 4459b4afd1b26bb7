use clap::{Arg, ArgAction, ArgMatches, Command};

pub fn build_cli() -> Command {
    Command::new("pr")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Switch between tmux sessions for your projects")
        .long_about(
            "pr resolves a short token to a project and switches your tmux client to its \
             session, creating the session when needed. The token is matched against the \
             current directory (.), absolute paths, previous sessions (-, --, ...), live \
             sessions, remembered favourites and finally directories in your home.\n\n\
             Without a token, live sessions are listed.",
        )
        .after_help("Use `pr -- --` to pass a token that starts with two dashes.")
        .arg(
            Arg::new("token")
                .help("Project, session, path or previous-session marker to switch to")
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("all")
                .short('a')
                .long("all")
                .help("Also list remembered sessions that are not running")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("wide")
                .short('w')
                .long("wide")
                .help("Show the TODO column in listings")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("temp")
                .short('T')
                .long("temp")
                .help("Create a new temporary project and switch to it")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("create")
                .short('c')
                .long("create")
                .help("Create the directory of an absolute path token if missing")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("edit")
                .long("edit")
                .help("Edit the favourites file")
                .action(ArgAction::SetTrue)
                .conflicts_with_all(["todo", "token", "temp", "interactive"]),
        )
        .arg(
            Arg::new("todo")
                .short('t')
                .long("todo")
                .help("Edit the TODO file of the current session's project")
                .action(ArgAction::SetTrue)
                .conflicts_with_all(["token", "temp", "interactive"]),
        )
        .arg(
            Arg::new("interactive")
                .short('i')
                .long("interactive")
                .help("List sessions and prompt for a project to switch to")
                .action(ArgAction::SetTrue)
                .conflicts_with("token"),
        )
}

pub fn get_matches() -> ArgMatches {
    build_cli().get_matches()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_build() {
        let app = build_cli();
        assert_eq!(app.get_name(), "pr");
        build_cli().debug_assert();
    }

    #[test]
    fn test_cli_no_arguments_lists() {
        let matches = build_cli().try_get_matches_from(vec!["pr"]).unwrap();
        assert!(matches.get_one::<String>("token").is_none());
        assert!(!matches.get_flag("all"));
        assert!(!matches.get_flag("verbose"));
    }

    #[test]
    fn test_cli_token() {
        let matches = build_cli()
            .try_get_matches_from(vec!["pr", "web", "-c"])
            .unwrap();
        assert_eq!(matches.get_one::<String>("token").unwrap(), "web");
        assert!(matches.get_flag("create"));
    }

    #[test]
    fn test_cli_single_dash_is_a_token() {
        let matches = build_cli().try_get_matches_from(vec!["pr", "-"]).unwrap();
        assert_eq!(matches.get_one::<String>("token").unwrap(), "-");
    }

    #[test]
    fn test_cli_double_dash_marker_after_separator() {
        let matches = build_cli()
            .try_get_matches_from(vec!["pr", "--", "--"])
            .unwrap();
        assert_eq!(matches.get_one::<String>("token").unwrap(), "--");

        let matches = build_cli()
            .try_get_matches_from(vec!["pr", "--", "---"])
            .unwrap();
        assert_eq!(matches.get_one::<String>("token").unwrap(), "---");
    }

    #[test]
    fn test_cli_listing_flags() {
        let matches = build_cli()
            .try_get_matches_from(vec!["pr", "-a", "-w"])
            .unwrap();
        assert!(matches.get_flag("all"));
        assert!(matches.get_flag("wide"));
    }

    #[test]
    fn test_cli_temp_with_token() {
        let matches = build_cli()
            .try_get_matches_from(vec!["pr", "-T", "web"])
            .unwrap();
        assert!(matches.get_flag("temp"));
        assert_eq!(matches.get_one::<String>("token").unwrap(), "web");
    }

    #[test]
    fn test_cli_edit_conflicts_with_token() {
        let result = build_cli().try_get_matches_from(vec!["pr", "--edit", "web"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_todo_conflicts_with_edit() {
        let result = build_cli().try_get_matches_from(vec!["pr", "--edit", "-t"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_interactive_rejects_token() {
        let result = build_cli().try_get_matches_from(vec!["pr", "-i", "web"]);
        assert!(result.is_err());

        let matches = build_cli()
            .try_get_matches_from(vec!["pr", "-i", "-a"])
            .unwrap();
        assert!(matches.get_flag("interactive"));
    }

    #[test]
    fn test_cli_version_flag() {
        let err = build_cli()
            .try_get_matches_from(vec!["pr", "-V"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_cli_unknown_flag_rejected() {
        let result = build_cli().try_get_matches_from(vec!["pr", "--json"]);
        assert!(result.is_err());
    }
}
