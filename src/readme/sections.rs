//! Body sections of the generated document

use super::ReadmeContext;
use crate::snapshot::License;
use crate::stack::{FrameworkId, LanguageId, ProjectType};

const DEFAULT_DESCRIPTION: &str = "A modern software project built with cutting-edge technologies.";

/// Dependencies worth calling out in the tech stack, in render order
const NOTABLE_DEPENDENCIES: &[(&str, &str)] = &[
    ("react", "UI library"),
    ("vue", "Progressive framework"),
    ("angular", "Platform for building mobile and desktop web applications"),
    ("express", "Web application framework"),
    ("fastify", "Fast and low overhead web framework"),
    ("next", "React framework"),
    ("nuxt", "Vue.js framework"),
    ("gatsby", "Static site generator"),
    ("webpack", "Module bundler"),
    ("vite", "Build tool"),
    ("typescript", "Typed superset of JavaScript"),
];

const SCRIPT_DESCRIPTIONS: &[(&str, &str)] = &[
    ("start", "Start the production server"),
    ("dev", "Start the development server"),
    ("build", "Build the project for production"),
    ("test", "Run the test suite"),
    ("lint", "Run the linter"),
    ("format", "Format the code"),
    ("type-check", "Run TypeScript type checking"),
    ("preview", "Preview the production build"),
    ("deploy", "Deploy the application"),
];

pub(super) fn title(ctx: &ReadmeContext<'_>) -> String {
    format!("# {}", ctx.snapshot.name)
}

pub(super) fn topics(ctx: &ReadmeContext<'_>) -> Option<String> {
    if ctx.snapshot.topics.is_empty() {
        return None;
    }
    let tags: Vec<String> = ctx
        .snapshot
        .topics
        .iter()
        .map(|topic| format!("`{}`", topic))
        .collect();
    Some(format!("## 🏷️ Topics\n\n{}", tags.join(" ")))
}

pub(super) fn description(ctx: &ReadmeContext<'_>) -> String {
    ctx.snapshot
        .description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or(DEFAULT_DESCRIPTION)
        .to_string()
}

pub(super) fn features(ctx: &ReadmeContext<'_>) -> String {
    let classification = ctx.classification;
    let mut features: Vec<&str> = match classification.project_type {
        ProjectType::WebApplication => vec![
            "🌐 Modern web application with responsive design",
            "⚡ Fast and optimized performance",
            "🎨 Beautiful and intuitive user interface",
        ],
        ProjectType::ApiBackend => vec![
            "🚀 RESTful API with comprehensive endpoints",
            "🔒 Secure authentication and authorization",
            "📊 Database integration and data management",
        ],
        ProjectType::Library => vec![
            "📦 Easy to install and integrate",
            "🔧 Flexible configuration options",
            "📚 Comprehensive documentation",
        ],
        _ => vec![
            "✨ Clean and maintainable codebase",
            "🔧 Easy to configure and customize",
            "📱 Cross-platform compatibility",
        ],
    };

    match classification.framework {
        Some(FrameworkId::React) => {
            features.push("⚛️ Built with React for component-based architecture")
        }
        Some(FrameworkId::NextJs) => features.push("🔥 Server-side rendering with Next.js"),
        Some(FrameworkId::Vue) => features.push("💚 Vue.js for reactive user interfaces"),
        Some(FrameworkId::Express) => {
            features.push("🚂 Express.js for robust server-side logic")
        }
        _ => {}
    }

    if classification.has_tests {
        features.push("🧪 Comprehensive test coverage");
    }
    if classification.has_container_file {
        features.push("🐳 Docker support for easy deployment");
    }

    let lines: Vec<String> = features.iter().map(|f| format!("- {}", f)).collect();
    format!("## ✨ Features\n\n{}", lines.join("\n"))
}

pub(super) fn api_documentation(ctx: &ReadmeContext<'_>) -> Option<String> {
    if ctx.classification.project_type != ProjectType::ApiBackend {
        return None;
    }

    Some(
        r#"## 📚 API Documentation

### Base URL
```
http://localhost:3000/api
```

### Endpoints

| Method | Endpoint | Description |
|--------|----------|-------------|
| GET    | `/`      | Health check |
| GET    | `/users` | Get all users |
| POST   | `/users` | Create a new user |
| GET    | `/users/:id` | Get user by ID |
| PUT    | `/users/:id` | Update user |
| DELETE | `/users/:id` | Delete user |

### Example Request
```bash
curl -X GET http://localhost:3000/api/users
```

### Example Response
```json
{
  "status": "success",
  "data": [
    {
      "id": 1,
      "name": "John Doe",
      "email": "john@example.com"
    }
  ]
}
```"#
            .to_string(),
    )
}

pub(super) fn script_description(script: &str) -> String {
    SCRIPT_DESCRIPTIONS
        .iter()
        .find(|(name, _)| *name == script)
        .map(|(_, description)| description.to_string())
        .unwrap_or_else(|| format!("Run {}", script))
}

pub(super) fn scripts(ctx: &ReadmeContext<'_>) -> Option<String> {
    let scripts = &ctx.snapshot.manifest.scripts;
    if scripts.is_empty() {
        return None;
    }

    let mut section = String::from(
        "## 📜 Available Scripts\n\n| Script | Description |\n|--------|-------------|",
    );
    for script in scripts {
        section.push_str(&format!(
            "\n| `npm run {}` | {} |",
            script.name,
            script_description(&script.name)
        ));
    }
    Some(section)
}

pub(super) fn testing(ctx: &ReadmeContext<'_>) -> Option<String> {
    if !ctx.classification.has_tests {
        return None;
    }
    let manifest = &ctx.snapshot.manifest;

    Some(format!(
        "## 🧪 Testing\n\n\
         ```bash\n\
         # Run tests\n\
         {}\n\
         \n\
         # Run tests with coverage\n\
         {}\n\
         ```",
        manifest.script("test").unwrap_or("npm test"),
        manifest
            .script("test:coverage")
            .unwrap_or("npm run test -- --coverage"),
    ))
}

pub(super) fn docker(ctx: &ReadmeContext<'_>) -> Option<String> {
    if !ctx.classification.has_container_file {
        return None;
    }

    Some(format!(
        "## 🐳 Docker\n\n\
         ```bash\n\
         # Build the Docker image\n\
         docker build -t {slug} .\n\
         \n\
         # Run the container\n\
         docker run -p 3000:3000 {slug}\n\
         ```",
        slug = ctx.slug
    ))
}

pub(super) fn project_structure(ctx: &ReadmeContext<'_>) -> String {
    let tree = match &ctx.snapshot.language {
        Some(lang) if lang.is_node() => {
            let ext = if *lang == LanguageId::TypeScript { "ts" } else { "js" };
            format!(
                "├── package.json\n\
                 ├── src/\n\
                 │   ├── index.{}\n\
                 │   └── components/\n\
                 ├── public/\n\
                 └── dist/",
                ext
            )
        }
        Some(LanguageId::Python) => "├── requirements.txt\n\
                                     ├── src/\n\
                                     │   └── main.py\n\
                                     ├── tests/\n\
                                     └── docs/"
            .to_string(),
        Some(LanguageId::Java) => "├── pom.xml\n\
                                   ├── src/\n\
                                   │   ├── main/java/\n\
                                   │   └── test/java/\n\
                                   └── target/"
            .to_string(),
        _ => "├── src/\n\
              ├── tests/\n\
              ├── docs/\n\
              └── build/"
            .to_string(),
    };

    format!(
        "## 📁 Project Structure\n\n```\n{}/\n├── README.md\n{}\n```",
        ctx.snapshot.name, tree
    )
}

pub(super) fn built_with(ctx: &ReadmeContext<'_>) -> String {
    let mut stack = Vec::new();

    if let Some(language) = &ctx.snapshot.language {
        stack.push(format!("- **{}** - Primary programming language", language));
    }
    if let Some(framework) = ctx.classification.framework {
        stack.push(format!("- **{}** - Application framework", framework));
    }

    let manifest = &ctx.snapshot.manifest;
    stack.extend(
        NOTABLE_DEPENDENCIES
            .iter()
            .filter(|(dep, _)| manifest.has_any_dependency(dep))
            .map(|(dep, description)| format!("- **{}** - {}", dep, description)),
    );

    if stack.is_empty() {
        "## 🛠️ Built With".to_string()
    } else {
        format!("## 🛠️ Built With\n\n{}", stack.join("\n"))
    }
}

pub(super) fn contributing(ctx: &ReadmeContext<'_>) -> String {
    format!(
        "## 🤝 Contributing\n\n\
         We welcome contributions! Here's how you can help:\n\n\
         ### Development Process\n\n\
         1. Fork the repository\n\
         2. Create your feature branch (`git checkout -b feature/amazing-feature`)\n\
         3. Make your changes\n\
         4. Add tests for your changes\n\
         5. Ensure all tests pass\n\
         6. Commit your changes (`git commit -m 'Add some amazing feature'`)\n\
         7. Push to the branch (`git push origin feature/amazing-feature`)\n\
         8. Open a Pull Request\n\n\
         ### Code Style\n\n\
         - Follow the existing code style\n\
         - Run the linter before submitting: `{}`\n\
         - Write meaningful commit messages\n\
         - Add tests for new features\n\n\
         ### Reporting Issues\n\n\
         - Use the GitHub issue tracker\n\
         - Provide detailed information about the bug\n\
         - Include steps to reproduce the issue\n\
         - Add relevant labels",
        ctx.snapshot.manifest.script("lint").unwrap_or("npm run lint")
    )
}

fn license_body(license: Option<&License>) -> String {
    let Some(license) = license else {
        return "This project is open source. Please check the repository for license information."
            .to_string();
    };

    let (kind, terms) = if license.is_mit() {
        (
            "permissive",
            "allows for commercial use, modification, distribution, and private use.",
        )
    } else {
        (
            "copyleft",
            "requires derivative works to be licensed under the same terms.",
        )
    };

    format!(
        "This project is licensed under the {name} License - see the [LICENSE](LICENSE) file for details.\n\n\
         ### License Summary\n\n\
         The {name} license is a {kind} license that {terms}",
        name = license.name,
        kind = kind,
        terms = terms
    )
}

pub(super) fn license(ctx: &ReadmeContext<'_>) -> String {
    format!(
        "## 📄 License\n\n{}",
        license_body(ctx.snapshot.license.as_ref())
    )
}

pub(super) fn authors(ctx: &ReadmeContext<'_>) -> String {
    let login = &ctx.snapshot.owner.login;
    format!(
        "## 👥 Authors\n\n- **{login}** - *Project Creator* - [@{login}](https://github.com/{login})",
        login = login
    )
}

pub(super) fn acknowledgments() -> String {
    "## 🙏 Acknowledgments\n\n\
     - Thanks to all contributors who have helped shape this project\n\
     - Inspired by the open-source community\n\
     - Built with ❤️ and modern development practices"
        .to_string()
}

pub(super) fn stats(ctx: &ReadmeContext<'_>) -> String {
    let snapshot = ctx.snapshot;
    format!(
        "## 📊 Project Stats\n\n\
         - ⭐ Stars: {}\n\
         - 🍴 Forks: {}\n\
         - 🐛 Issues: {}\n\
         - 📝 Language: {}",
        snapshot.stats.stars,
        snapshot.stats.forks,
        snapshot.stats.open_issues,
        snapshot
            .language
            .as_ref()
            .map(|l| l.name())
            .unwrap_or("Multiple")
    )
}

pub(super) fn footer() -> String {
    "---\n\n⭐️ If you found this project helpful, please give it a star!".to_string()
}

pub(super) fn live_demo(ctx: &ReadmeContext<'_>) -> Option<String> {
    ctx.snapshot
        .homepage
        .as_deref()
        .filter(|hp| !hp.trim().is_empty())
        .map(|hp| format!("🌐 **Live Demo**: [{hp}]({hp})", hp = hp))
}
