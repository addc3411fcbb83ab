crate::define_label_enum! {
    /// Framework recognised from manifest dependencies or root files
    FrameworkId {
        React => "react" : "React",
        NextJs => "nextjs" : "Next.js",
        Gatsby => "gatsby" : "Gatsby",
        Remix => "remix" : "Remix",
        Vue => "vue" : "Vue.js",
        Nuxt => "nuxt" : "Nuxt.js",
        Angular => "angular" : "Angular",
        Express => "express" : "Express.js",
        Fastify => "fastify" : "Fastify",
        Koa => "koa" : "Koa.js",
        NestJs => "nestjs" : "NestJS",
        Vite => "vite" : "Vite",
        Webpack => "webpack" : "Webpack",
        Parcel => "parcel" : "Parcel",
        Python => "python" : "Python",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framework_id_serialization() {
        assert_eq!(
            serde_json::to_string(&FrameworkId::NextJs).unwrap(),
            "\"nextjs\""
        );
        assert_eq!(serde_json::to_string(&FrameworkId::Koa).unwrap(), "\"koa\"");
    }

    #[test]
    fn test_framework_id_label() {
        assert_eq!(FrameworkId::NextJs.label(), "Next.js");
        assert_eq!(FrameworkId::Vue.to_string(), "Vue.js");
        assert_eq!(FrameworkId::from_label("Express.js"), Some(FrameworkId::Express));
        assert_eq!(FrameworkId::from_label("Svelte"), None);
    }

    #[test]
    fn test_unknown_framework_is_rejected() {
        let result: Result<FrameworkId, _> = serde_json::from_str("\"svelte\"");
        assert!(result.is_err());
    }
}
