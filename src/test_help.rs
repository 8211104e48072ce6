#[cfg(test)]
mod help {
    use crate::*;

    fn declared(opts: &str) -> Parser {
        let mut p = Parser::from_interlaced(&format!("program.name=tool,{}", opts));
        p.def_flag(Flag::new("--size", "-s", "Size in bytes.")
            .with_value(Value::new("0").name("n").required(true)));
        p.def_flag(Flag::new("--mode", "", "Mode.").with_value(Value::choose(&["fast", "slow"])));
        p.def_arg(Arg::new("input").description("File to read."));
        p.def_arg(Arg::new("output").required(false));
        p
    }

    fn line(left: &str, right: &str) -> String {
        format!("    {:<24}{}\n", left, right)
    }

    #[test]
    fn compact() {
        let p = declared("");
        let expect = [
            "usage: tool [flags] <input> [<output>]\n".to_string(),
            "Arguments:\n".to_string(),
            line("input", "File to read. [required]"),
            "    output\n".to_string(),
            "Flags:\n".to_string(),
            line("-h, --help", "Show this help."),
            line("-s, --size <n>", "Size in bytes. [default: 0]"),
            line("--mode [<fast|slow>]", "Mode. [one of: fast|slow, default: fast]"),
        ].concat();

        assert_eq!(p.help(), expect);
    }

    #[test]
    fn spaced() {
        let help = declared("help.compact=0").help();
        assert!(help.starts_with("usage: tool [flags] <input> [<output>]\n\nArguments:\n"));
        assert!(help.contains("\n\nFlags:\n"));
    }

    #[test]
    fn margin_and_tab() {
        let help = declared("help.margin=40,help.tab=  ").help();
        let size = help.lines()
            .find(|l| l.starts_with("  -s, --size"))
            .expect("size flag should be listed");
        assert_eq!(size.find("Size in bytes."), Some(40));
    }

    #[test]
    fn only_described() {
        let help = declared("help.show=0").help();
        assert!(help.contains("input"));
        assert!(!help.contains("output"), "entries without a description are hidden");
        assert!(help.contains("--mode"));
    }

    #[test]
    fn undeclared_hidden_by_default() {
        let mut p = declared("");
        p.parse(string_vec!("tool", "in", "out", "extra", "--zz"));

        let help = p.help();
        assert!(!help.contains("--zz"));
        assert!(!help.contains("#2"));
    }

    #[test]
    fn undeclared_shown_on_request() {
        let mut p = declared("help.show=2");
        p.parse(string_vec!("tool", "in", "out", "extra", "--zz"));

        let help = p.help();
        assert!(help.contains("    --zz"), "{}", help);
        assert!(help.contains("    #2"), "{}", help);
        assert_eq!(help.matches("(undeclared)").count(), 2);
    }

    #[test]
    fn without_help_flag() {
        let mut p = Parser::from_interlaced("program.name=bare,help.add=0");
        assert_eq!(p.help(), "usage: bare\n");

        p.def_arg(Arg::new("file"));
        assert_eq!(p.help(), "usage: bare <file>\nArguments:\n    file    [required]\n");
    }
}
