#[cfg(test)]
mod count {
    use crate::*;

    fn declared() -> Parser {
        let mut p = Parser::from_interlaced("help.add=0");
        p.def_flag(Flag::new("--all", "-a", "all"));
        p.def_flag(Flag::new("--size", "-s", "size").with_value(Value::new("0").required(true)));
        p.def_arg(Arg::new("in"));
        p.def_arg(Arg::new("out").required(false));
        p
    }

    #[test]
    fn defined() {
        let p = declared();
        let c = p.counts();
        assert_eq!(c.defined.flags, 2);
        assert_eq!(c.defined.args.required, 1);
        assert_eq!(c.defined.args.non_required, 1);
        assert_eq!(c.defined.all(), 4);
        assert_eq!(c.parsed.all(), 0);
    }

    #[test]
    fn help_flag_counts_as_declared() {
        let p = Parser::new();
        assert_eq!(p.counts().defined.flags, 1);
        assert!(p.get_flag("-h").expect("help is declared").is_declared);
    }

    #[test]
    fn redeclare_not_counted() {
        let mut p = declared();
        p.def_flag(Flag::new("--all", "", "again"));
        assert_eq!(p.counts().defined.flags, 2);
    }

    #[test]
    fn parsed() {
        let mut p = declared();
        assert!(p.parse(string_vec!("prog", "-a", "--size=3", "-x", "--yy", "i", "o", "extra")));

        let c = p.counts().parsed;
        assert_eq!(c.defined.flags, 2);
        assert_eq!(c.undefined.flags, 2);
        assert_eq!(c.defined.args.required, 1);
        assert_eq!(c.defined.args.non_required, 1);
        assert_eq!(c.undefined.args.non_required, 1);
        assert_eq!(c.undefined.args.required, 0);
        assert_eq!(c.flags(), 4);
        assert_eq!(c.args(), 3);
        assert_eq!(c.all(), 7);
    }

    #[test]
    fn repeated_flag_counts_each_time() {
        let mut p = declared();
        p.parse(string_vec!("prog", "-a", "--all", "-aa", "in"));
        assert_eq!(p.counts().parsed.defined.flags, 4);
    }

    #[test]
    fn accumulates_across_parses() {
        let mut p = declared();
        let argv = string_vec!("prog", "-a", "-x", "in");

        assert!(p.parse(argv.clone()));
        let first = *p.counts();
        assert!(p.parse(argv));
        let second = *p.counts();

        assert_eq!(second.defined, first.defined, "declarations are not repeated");
        assert_eq!(second.parsed.defined.flags, 2 * first.parsed.defined.flags);
        assert_eq!(second.parsed.undefined.flags, 2 * first.parsed.undefined.flags);
        assert_eq!(second.parsed.args(), 2 * first.parsed.args());
    }

    #[test]
    fn errors_accumulate_but_result_is_per_parse() {
        let mut p = declared();

        assert!(!p.parse(string_vec!("prog")));
        assert_eq!(p.errors().len(), 1);

        assert!(p.parse(string_vec!("prog", "in")), "an earlier failure must not fail a clean parse");
        assert_eq!(p.errors().len(), 1, "errors are never removed");

        assert!(!p.parse(string_vec!("prog", "--size")));
        assert_eq!(p.errors().len(), 3);
    }
}
