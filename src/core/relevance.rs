use log::debug;

/// Extensions listed in the tree, with the language tag used on their code fences.
pub const RELEVANT_EXTENSIONS: &[(&str, &str)] = &[
    (".js", "javascript"),
    (".jsx", "javascript"),
    (".json", "json"),
    (".css", "css"),
    (".html", "html"),
];

pub const INCLUDE_ALWAYS: &[&str] = &["package.json", "index.html"];

pub const DEFAULT_EMBED_FILES: &[&str] = &["Recommendations.jsx", "package.json"];

pub const EXCLUDED_DIR: &str = "node_modules";
pub const EXCLUDED_FILE: &str = "package-lock.json";

pub fn is_relevant_file(name: &str) -> bool {
    RELEVANT_EXTENSIONS
        .iter()
        .any(|(ext, _)| name.ends_with(ext))
        || INCLUDE_ALWAYS.contains(&name)
}

/// Plain substring containment: `build` matches `rebuild/`, `build/` and `builder/` alike.
pub fn should_ignore(path: &str, patterns: &[String]) -> bool {
    match patterns.iter().find(|pattern| path.contains(pattern.as_str())) {
        Some(pattern) => {
            debug!("Path {} matches ignore pattern: {}", path, pattern);
            true
        }
        None => false,
    }
}

pub fn should_embed(name: &str, embed_files: &[String]) -> bool {
    embed_files.iter().any(|embed| embed == name)
}

pub fn language_for(name: &str) -> &'static str {
    let extension = match name.rfind('.') {
        // a leading dot marks a hidden file, not an extension
        Some(idx) if idx > 0 => &name[idx..],
        _ => return "",
    };

    RELEVANT_EXTENSIONS
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, language)| *language)
        .unwrap_or("")
}
