crate::define_label_enum! {
    /// Coarse category of what a repository builds
    ProjectType {
        WebApplication => "web-application" : "Web Application",
        ApiBackend => "api-backend" : "API/Backend",
        CliTool => "cli-tool" : "CLI Tool",
        Library => "library" : "Library/Package",
        MobileApplication => "mobile-application" : "Mobile Application",
        DesktopApplication => "desktop-application" : "Desktop Application",
        PythonApplication => "python-application" : "Python Application",
        JavaApplication => "java-application" : "Java Application",
        GoApplication => "go-application" : "Go Application",
        RustApplication => "rust-application" : "Rust Application",
        CppApplication => "cpp-application" : "C++ Application",
        SoftwareProject => "software-project" : "Software Project",
    }
}
