crate::define_id_enum! {
    /// Primary language reported by the hosting API
    LanguageId {
        JavaScript => "javascript" : "JavaScript",
        TypeScript => "typescript" : "TypeScript",
        Python => "python" : "Python",
        Java => "java" : "Java",
        Cpp => "cpp" : "C++",
        Go => "go" : "Go" | "Golang",
        Rust => "rust" : "Rust",
        Php => "php" : "PHP",
        Ruby => "ruby" : "Ruby",
        Swift => "swift" : "Swift",
    }
}

impl LanguageId {
    /// JavaScript and TypeScript share install, usage and layout templates
    pub fn is_node(&self) -> bool {
        matches!(self, LanguageId::JavaScript | LanguageId::TypeScript)
    }
}
