#[cfg(test)]
mod kind {
    use crate::*;

    fn check(token: &str, expect: ParamKind) {
        assert_eq!(ParamKind::from(token), expect, "classifying {:?}", token);
    }

    #[test]
    fn positionals() {
        check("a", ParamKind::Positional);
        check("-", ParamKind::Positional);
        check("--", ParamKind::Positional);
        check("file.txt", ParamKind::Positional);
        check("a-b", ParamKind::Positional);
        check("", ParamKind::Positional);
    }

    #[test]
    fn shorts() {
        check("-a", ParamKind::ShortFlag);
        check("-é", ParamKind::ShortFlag);
        check("-abc", ParamKind::ShortFlagCluster);
        check("-a=b", ParamKind::ShortFlagCluster);
    }

    #[test]
    fn longs() {
        check("--all", ParamKind::LongFlagBare);
        check("---", ParamKind::LongFlagBare);
        check("--size=300", ParamKind::LongFlagWithEquals(6));
        check("--b=", ParamKind::LongFlagWithEquals(3));
        check("--k=v=w", ParamKind::LongFlagWithEquals(3));
    }

    #[test]
    fn flag_shaped() {
        assert!(ParamKind::from("-x").is_flag());
        assert!(ParamKind::from("--x=1").is_flag());
        assert!(!ParamKind::from("--").is_flag());
        assert!(!ParamKind::from("x").is_flag());
    }
}
