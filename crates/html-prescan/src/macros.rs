macro_rules! strspn {
    ($expression:expr, $pattern:pat $(if $guard:expr)?) => {{
        $expression
            .iter()
            .position(|&b| !matches!(b, $pattern $(if $guard)?))
            .unwrap_or($expression.len())
    }};

    ($expression:expr, $pattern:pat $(if $guard:expr)?, $offset:expr) => {{
        $expression[$offset..]
            .iter()
            .position(|&b| !matches!(b, $pattern $(if $guard)?))
            .unwrap_or($expression.len() - $offset)
    }};
}

macro_rules! strcspn {
    ($expression:expr, $pattern:pat $(if $guard:expr)?) => {{
        $expression
            .iter()
            .position(|&b| matches!(b, $pattern $(if $guard)?))
            .unwrap_or($expression.len())
    }};

    ($expression:expr, $pattern:pat $(if $guard:expr)?, $offset:expr) => {{
        $expression[$offset..]
            .iter()
            .position(|&b| matches!(b, $pattern $(if $guard)?))
            .unwrap_or($expression.len() - $offset)
    }};
}

#[cfg(test)]
mod test {
    #[test]
    fn strspn() {
        assert_eq!(strspn!(b"   <p>", b' ' | b'\t'), 3);
        assert_eq!(strspn!(b"   <p>", b' ' | b'\t', 2), 1);
        assert_eq!(strspn!(b"   <p>", b' ' | b'\t', 3), 0);
        assert_eq!(strspn!(b"\t\r\n", b' ' | b'\t' | b'\r' | b'\n'), 3);
        assert_eq!(strspn!(b"", b' '), 0);
    }

    #[test]
    fn strcspn() {
        assert_eq!(strcspn!(b"href=x", b'=' | b'>'), 4);
        assert_eq!(strcspn!(b"href=x", b'=' | b'>', 4), 0);
        assert_eq!(strcspn!(b"value>", b' ' | b'>'), 5);
        assert_eq!(strcspn!(b"no-stop-bytes", b'>'), 13);
        assert_eq!(strcspn!(b"", b'>'), 0);
    }
}
