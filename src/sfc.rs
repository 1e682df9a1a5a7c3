//! `<style>` blocks inside single-file components.

use regex::Regex;
use std::sync::LazyLock;

static STYLE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)(?P<open><style\b[^>]*>)(?P<body>.*?)(?P<close></style\s*>)")
        .expect("style block pattern is valid")
});

/// Whether `id` names a whole component file rather than a stylesheet
/// extracted from one. Extracted blocks carry a `?query` and are plain CSS.
pub fn is_component(id: &str) -> bool {
    !id.contains('?') && id.to_ascii_lowercase().ends_with(".vue")
}

/// Replaces the body of every `<style>` block with `rewrite(body)`.
///
/// Everything outside the block bodies, including the tags themselves, is
/// copied through untouched. The first error aborts the whole rewrite.
pub fn rewrite_style_blocks<E, F>(source: &str, mut rewrite: F) -> Result<String, E>
where
    F: FnMut(&str) -> Result<String, E>,
{
    let mut out = String::with_capacity(source.len());
    let mut last = 0;

    for caps in STYLE_BLOCK.captures_iter(source) {
        let Some(body) = caps.name("body") else {
            continue;
        };
        out.push_str(&source[last..body.start()]);
        out.push_str(&rewrite(body.as_str())?);
        last = body.end();
    }

    out.push_str(&source[last..]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upper(body: &str) -> Result<String, ()> {
        Ok(body.to_uppercase())
    }

    #[test]
    fn test_is_component() {
        assert!(is_component("/app/src/App.vue"));
        assert!(is_component("C:\\app\\Card.VUE"));
        assert!(!is_component("/app/src/App.vue?vue&type=style&index=0&lang.css"));
        assert!(!is_component("/app/src/main.css"));
    }

    #[test]
    fn test_only_block_bodies_change() {
        let source = "<template><div class=\"text-sm\"/></template>\n<style scoped lang=\"scss\">a{b:c}</style>\n<script>x</script>";
        assert_eq!(
            rewrite_style_blocks(source, upper).unwrap(),
            "<template><div class=\"text-sm\"/></template>\n<style scoped lang=\"scss\">A{B:C}</style>\n<script>x</script>"
        );
    }

    #[test]
    fn test_multiple_blocks() {
        let source = "<style>a</style><p>b</p><STYLE module>c</STYLE >";
        assert_eq!(
            rewrite_style_blocks(source, upper).unwrap(),
            "<style>A</style><p>b</p><STYLE module>C</STYLE >"
        );
    }

    #[test]
    fn test_no_blocks() {
        let source = "<template><p/></template>";
        assert_eq!(rewrite_style_blocks(source, upper).unwrap(), source);
    }

    #[test]
    fn test_error_aborts() {
        let source = "<style>ok</style><style>bad</style>";
        let result = rewrite_style_blocks(source, |body| {
            if body == "bad" {
                Err(body.to_string())
            } else {
                Ok(body.to_string())
            }
        });
        assert_eq!(result, Err("bad".to_string()));
    }

    #[test]
    fn test_style_prefixed_tags_are_not_blocks() {
        let source = "<styles>a</styles>";
        assert_eq!(rewrite_style_blocks(source, upper).unwrap(), source);
    }
}
