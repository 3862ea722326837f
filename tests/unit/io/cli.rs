//! Tests for command-line parsing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use greedyqueens::io::cli::Cli;

    // Tests parsing with only the board size argument
    // Verified by changing default flag values
    #[test]
    fn test_parse_minimal_args() {
        let cli = Cli::parse_from(["greedyqueens", "8"]);
        assert_eq!(cli.size, 8);
        assert_eq!(cli.seed, None);
        assert!(!cli.quiet);
        assert!(!cli.attempts);
        assert!(cli.should_show_progress());
    }

    // Tests parsing with every flag supplied
    #[test]
    fn test_parse_all_args() {
        let cli = Cli::parse_from([
            "greedyqueens",
            "12",
            "--seed",
            "99",
            "--quiet",
            "--attempts",
        ]);
        assert_eq!(cli.size, 12);
        assert_eq!(cli.seed, Some(99));
        assert!(cli.quiet);
        assert!(cli.attempts);
        assert!(!cli.should_show_progress());
    }

    // Tests negative sizes parse so validation can reject them with a
    // solver error instead of a usage error
    #[test]
    fn test_parse_negative_size() {
        let cli = Cli::parse_from(["greedyqueens", "-5"]);
        assert_eq!(cli.size, -5);
    }
}
