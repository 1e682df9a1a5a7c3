/// A small utility-class stylesheet.
pub const UTILITIES_CSS: &str = r#"/* generated utilities */
.text-xs { font-size: 0.75rem; line-height: 1rem; }
.text-sm { font-size: 0.875rem; line-height: 1.25rem; }
.text-base { font-size: 1rem; line-height: 1.5rem; }
.leading-6 { line-height: 1.5rem; }
@media (min-width: 1024px) {
  .lg\:text-sm { font-size: 14px; }
}
"#;

pub const UTILITIES_CSS_SCALED: &str = r#"/* generated utilities */
.text-sm { font-size: 0.9000rem; line-height: 1.2000rem; }
.text-base { font-size: 1.0500rem; line-height: 1.5000rem; }
.text-lg { font-size: 1.2000rem; line-height: 1.8000rem; }
.leading-7 { line-height: 1.8000rem; }
@media (min-width: 1024px) {
  .lg\:text-base { font-size: 17px; }
}
"#;

/// A component with markup, script and two style blocks.
pub const COMPONENT_VUE: &str = r#"<template>
  <h1 class="text-sm">Title</h1>
</template>

<script setup>
const size = "16px";
</script>

<style scoped>
h1 { font-size: 20px; color: red; }
</style>

<style lang="scss">
.card { .text-lg { font: bold 16px/1.5 serif; } }
</style>
"#;

pub const COMPONENT_VUE_SCALED: &str = r#"<template>
  <h1 class="text-sm">Title</h1>
</template>

<script setup>
const size = "16px";
</script>

<style scoped>
h1 { font-size: 24px; color: red; }
</style>

<style lang="scss">
.card { .text-xl { font: bold 19px/1.5 serif; } }
</style>
"#;

/// Inputs the stylesheet parser rejects.
pub const MALFORMED_CSS: &[&str] = &[
    ".a { font-size: 16px",
    ".a { content: \"unterminated; font-size: 16px }",
    ".a { font-size: 16px } }",
    "/* open comment .a { font-size: 16px }",
    ".a { font-size: calc(16px + 2px; }",
];
