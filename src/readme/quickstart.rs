//! Prerequisites, installation and usage templates

use super::{python_module_name, ReadmeContext};
use crate::stack::{LanguageId, ProjectType};

pub(super) fn prerequisites(ctx: &ReadmeContext<'_>) -> String {
    let mut lines: Vec<String> = match &ctx.snapshot.language {
        Some(lang) if lang.is_node() => vec![
            "- Node.js (version 16 or higher)".into(),
            "- npm or yarn package manager".into(),
        ],
        Some(LanguageId::Python) => vec![
            "- Python 3.8 or higher".into(),
            "- pip package manager".into(),
        ],
        Some(LanguageId::Java) => vec![
            "- Java Development Kit (JDK) 11 or higher".into(),
            "- Maven or Gradle build tool".into(),
        ],
        Some(LanguageId::Go) => vec!["- Go 1.19 or higher".into()],
        Some(LanguageId::Rust) => vec![
            "- Rust 1.60 or higher".into(),
            "- Cargo package manager".into(),
        ],
        Some(lang) => vec![format!("- {} development environment", lang)],
        None => vec!["- Required development environment".into()],
    };

    lines.push("- Git for version control".into());
    lines.join("\n")
}

pub(super) fn installation(ctx: &ReadmeContext<'_>) -> String {
    let mut block = format!(
        "```bash\n\
         # Clone the repository\n\
         git clone {}\n\
         \n\
         # Navigate to the project directory\n\
         cd {}\n",
        ctx.snapshot.clone_url, ctx.slug
    );

    let steps = match &ctx.snapshot.language {
        Some(lang) if lang.is_node() => Some(
            "# Install dependencies\n\
             npm install\n\
             \n\
             # Or using yarn\n\
             yarn install\n",
        ),
        Some(LanguageId::Python) => Some(
            "# Create a virtual environment\n\
             python -m venv venv\n\
             \n\
             # Activate the virtual environment\n\
             # On Windows:\n\
             venv\\Scripts\\activate\n\
             # On macOS/Linux:\n\
             source venv/bin/activate\n\
             \n\
             # Install dependencies\n\
             pip install -r requirements.txt\n",
        ),
        Some(LanguageId::Java) => Some(
            "# Build the project\n\
             mvn clean install\n\
             \n\
             # Or using Gradle\n\
             gradle build\n",
        ),
        Some(LanguageId::Go) => Some(
            "# Download dependencies\n\
             go mod download\n\
             \n\
             # Build the project\n\
             go build\n",
        ),
        Some(LanguageId::Rust) => Some(
            "# Build the project\n\
             cargo build --release\n",
        ),
        _ => None,
    };

    if let Some(steps) = steps {
        block.push('\n');
        block.push_str(steps);
    }
    block.push_str("```");
    block
}

pub(super) fn usage(ctx: &ReadmeContext<'_>) -> String {
    let manifest = &ctx.snapshot.manifest;
    let slug = ctx.slug.as_str();

    match ctx.classification.project_type {
        ProjectType::WebApplication => format!(
            "```bash\n\
             # Start the development server\n\
             {}\n\
             \n\
             # Build for production\n\
             {}\n\
             \n\
             # Start production server\n\
             {}\n\
             ```\n\
             \n\
             Visit `http://localhost:3000` to view the application.",
            manifest
                .script("dev")
                .or_else(|| manifest.script("start"))
                .unwrap_or("npm run dev"),
            manifest.script("build").unwrap_or("npm run build"),
            manifest.script("start").unwrap_or("npm start"),
        ),
        ProjectType::ApiBackend => format!(
            "```bash\n\
             # Start the server\n\
             {}\n\
             \n\
             # Run in development mode\n\
             {}\n\
             ```\n\
             \n\
             The API will be available at `http://localhost:3000` (or your configured port).",
            manifest
                .script("start")
                .or_else(|| manifest.script("dev"))
                .unwrap_or("npm start"),
            manifest.script("dev").unwrap_or("npm run dev"),
        ),
        ProjectType::CliTool => {
            let runner = match &ctx.snapshot.language {
                Some(lang) if lang.is_node() => "node".to_string(),
                Some(lang) => lang.name().to_lowercase(),
                None => "run".to_string(),
            };
            format!(
                "```bash\n\
                 # Run the CLI tool\n\
                 {} {}\n\
                 \n\
                 # Show help\n\
                 {} --help\n\
                 ```",
                runner, slug, slug
            )
        }
        _ => language_usage(ctx),
    }
}

fn language_usage(ctx: &ReadmeContext<'_>) -> String {
    let manifest = &ctx.snapshot.manifest;
    let slug = ctx.slug.as_str();

    let (first, second) = match &ctx.snapshot.language {
        Some(lang) if lang.is_node() => (
            format!("# Run the application\n{}", manifest.script("start").unwrap_or("npm start")),
            format!("# Run in development mode\n{}", manifest.script("dev").unwrap_or("npm run dev")),
        ),
        Some(LanguageId::Python) => (
            "# Run the application\npython main.py".to_string(),
            format!(
                "# Or if using a specific entry point\npython -m {}",
                python_module_name(slug)
            ),
        ),
        Some(LanguageId::Java) => (
            format!("# Run the application\njava -jar target/{}.jar", slug),
            "# Or using Maven\nmvn spring-boot:run".to_string(),
        ),
        Some(LanguageId::Go) => (
            "# Run the application\ngo run main.go".to_string(),
            format!("# Or run the built binary\n./{}", slug),
        ),
        Some(LanguageId::Rust) => (
            "# Run the application\ncargo run".to_string(),
            format!("# Or run the built binary\n./target/release/{}", slug),
        ),
        _ => {
            return "```bash\n# Run the application\n# Add specific usage instructions here\n```"
                .to_string()
        }
    };

    format!("```bash\n{}\n\n{}\n```", first, second)
}
