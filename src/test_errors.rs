#[cfg(test)]
mod errors {
    use crate::*;

    fn only_error(p: &Parser, kind: ErrorKind) {
        assert_eq!(p.errors().len(), 1, "unexpected errors:\n{}", p.error());
        assert_eq!(p.errors()[0].kind, kind);
        assert_eq!(p.errors()[0].suspect, Suspect::None);
    }

    #[test]
    fn argv_absent() {
        let mut p = Parser::new();
        assert!(!p.parse_argv::<&str>(1, None));
        only_error(&p, ErrorKind::ArgVEmpty);
    }

    #[test]
    fn argc_zero() {
        let mut p = Parser::new();
        let argv = [Some("prog")];
        assert!(!p.parse_argv(0, Some(&argv[..])));
        only_error(&p, ErrorKind::ArgVEmpty);
    }

    #[test]
    fn first_element_absent() {
        let mut p = Parser::new();
        let argv: [Option<&str>; 1] = [None];
        assert!(!p.parse_argv(2, Some(&argv[..])));
        only_error(&p, ErrorKind::ArgVEmpty);
    }

    #[test]
    fn empty_vector() {
        let mut p = Parser::new();
        assert!(!p.parse(Vec::<String>::new()));
        only_error(&p, ErrorKind::ArgVEmpty);
    }

    #[test]
    fn argc_too_big() {
        let mut p = Parser::new();
        let argv = [Some("prog"), Some("-a")];
        assert!(!p.parse_argv(3, Some(&argv[..])));
        only_error(&p, ErrorKind::ArgCountMismatch);
        assert!(p.get_flag("-a").is_none(), "nothing is parsed after a precondition failure");
    }

    #[test]
    fn element_absent() {
        let mut p = Parser::new();
        let argv = [Some("prog"), None, Some("x")];
        assert!(!p.parse_argv(3, Some(&argv[..])));
        only_error(&p, ErrorKind::ArgCountMismatch);
    }

    #[test]
    fn argc_limits_the_vector() {
        let mut p = Parser::new();
        let argv = [Some("prog"), Some("-a"), None];
        assert!(p.parse_argv(2, Some(&argv[..])));
        assert!(p["-a"].is_set);
        assert!(p.errors().is_empty());
    }

    #[test]
    fn program_only() {
        let mut p = Parser::new();
        assert!(p.parse(string_vec!("program")));
        assert!(p.errors().is_empty());
        assert_eq!(p.program_name(), "program");
    }

    #[test]
    fn program_name_option_wins() {
        let mut p = Parser::from_interlaced("program.name=tool");
        p.parse(string_vec!("/usr/bin/whatever"));
        assert_eq!(p.program_name(), "tool");
    }

    #[test]
    fn redeclared() {
        let mut p = Parser::new();
        let first = p.def_flag(Flag::new("--all", "-a", "first"));

        assert_eq!(p.def_flag(Flag::new("--all", "", "long again")), first);
        assert_eq!(p.def_flag(Flag::new("--other", "-a", "short again")), first);
        assert_eq!(p["--all"].description, "first");
        assert!(p.get_flag("--other").is_none());

        let define = p.errors().select(ErrorGroup::Define);
        assert_eq!(define.len(), 2);
        for e in define {
            assert_eq!(e.kind, ErrorKind::FlagRedeclared);
            assert_eq!(e.suspect, Suspect::Flag(first));
        }
        assert!(p.errors().select(ErrorGroup::Parse).is_empty());
    }

    #[test]
    fn define_errors_do_not_fail_parse() {
        let mut p = Parser::new();
        p.def_flag(Flag::new("--help", "", "mine"));
        assert_eq!(p.errors().len(), 1);

        assert!(p.parse(string_vec!("prog")));
    }

    #[test]
    fn select_groups() {
        let mut p = Parser::new();
        p.def_flag(Flag::new("--help", "-h", ""));
        p.def_arg(Arg::new("needed"));
        p.def_flag(Flag::new("--n", "", "").with_value(Value::new("").required(true)));

        assert!(!p.parse(string_vec!("prog", "--n")));
        assert_eq!(p.errors().select(ErrorGroup::Define).len(), 1);

        let parse = p.errors().select(ErrorGroup::Parse);
        assert_eq!(parse.len(), 2);
        assert_eq!(parse[0].kind, ErrorKind::RequiredFlagValueMissing);
        assert_eq!(parse[1].kind, ErrorKind::RequiredArgumentMissing);
    }

    #[test]
    fn report() {
        let mut p = Parser::new();
        p.def_arg(Arg::new("input"));
        p.def_flag(Flag::new("--level", "-l", "").with_value(Value::new("1").required(true)));

        assert!(!p.parse(string_vec!("prog", "-l")));
        assert_eq!(
            p.error(),
            "error: required flag value was not given: -l, --level (no value follows)\n\
             error: required argument was not given: input\n"
        );
    }
}
