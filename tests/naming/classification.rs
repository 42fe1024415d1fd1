//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use classmint::core::{process_documents, RenameOptions};
    use classmint::naming::{fingerprint, RenameMode};

    use crate::common::{HEX_CLASS, NODE_ID};

    #[test]
    fn bare_hex_class_gets_numbered_name() {
        let html = format!(r#"<div class="{HEX_CLASS}"></div>"#);
        let outcome = process_documents(&html, "", &RenameOptions::default()).unwrap();

        assert_eq!(
            outcome.class_map.get(HEX_CLASS).unwrap(),
            format!("c001_{}", fingerprint(HEX_CLASS))
        );
    }

    #[test]
    fn webflow_node_id_is_renamed_in_strict_mode() {
        let html = format!(r#"<div id="{NODE_ID}"></div>"#);
        let css = format!("#{NODE_ID} {{ grid-area: 1 / 1 / 2 / 2; }}");
        let options = RenameOptions {
            mode: RenameMode::Strict,
            ..RenameOptions::default()
        };

        let outcome = process_documents(&html, &css, &options).unwrap();
        let name = outcome.id_map.get(NODE_ID).unwrap();

        assert!(name.starts_with("i001_"));
        assert_eq!(outcome.html, format!(r#"<div id="{name}"></div>"#));
        assert_eq!(outcome.css, format!("#{name} {{ grid-area: 1 / 1 / 2 / 2; }}"));
    }

    #[test]
    fn opaque_class_only_renamed_in_default_mode() {
        let html = r#"<div class="sc-AxjAm_x9Qz"></div>"#;

        let default = process_documents(html, "", &RenameOptions::default()).unwrap();
        assert!(default.class_map.contains_key("sc-AxjAm_x9Qz"));

        let strict = RenameOptions {
            mode: RenameMode::Strict,
            ..RenameOptions::default()
        };
        let strict = process_documents(html, "", &strict).unwrap();
        assert!(strict.class_map.is_empty());
        assert_eq!(strict.html, html);
    }

    #[test]
    fn custom_prefixes() {
        let html = format!(r#"<div class="{HEX_CLASS}" id="{HEX_CLASS}"></div>"#);
        let options = RenameOptions {
            class_prefix: "cls".to_string(),
            id_prefix: "node".to_string(),
            ..RenameOptions::default()
        };

        let outcome = process_documents(&html, "", &options).unwrap();

        assert!(outcome.class_map.get(HEX_CLASS).unwrap().starts_with("cls001_"));
        assert!(outcome.id_map.get(HEX_CLASS).unwrap().starts_with("node001_"));
    }
}

//  ███████╗ █████╗ ██╗██╗     ██╗███╗   ██╗ ██████╗
//  ██╔════╝██╔══██╗██║██║     ██║████╗  ██║██╔════╝
//  █████╗  ███████║██║██║     ██║██╔██╗ ██║██║  ███╗
//  ██╔══╝  ██╔══██║██║██║     ██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║██║███████╗██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚═╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod failing {
    use classmint::core::{process_documents, RenameOptions};

    #[test]
    fn meaningful_class_is_kept_everywhere() {
        let html = r#"<a class="btn-primary" href="/">go</a>"#;
        let css = ".btn-primary { color: white }";

        let outcome = process_documents(html, css, &RenameOptions::default()).unwrap();

        assert!(!outcome.class_map.contains_key("btn-primary"));
        assert_eq!(outcome.html, html);
        assert_eq!(outcome.css, css);
    }

    #[test]
    fn icon_classes_are_kept() {
        let html = r#"<i class="fa fa-arrow-circle-right-thin material-icons-outlined"></i>"#;

        let outcome = process_documents(html, "", &RenameOptions::default()).unwrap();

        assert!(outcome.class_map.is_empty());
        assert_eq!(outcome.html, html);
    }

    #[test]
    fn blank_values_are_ignored() {
        let html = r#"<div class="   " id=""></div>"#;

        let outcome = process_documents(html, "", &RenameOptions::default()).unwrap();

        assert!(outcome.class_map.is_empty());
        assert!(outcome.id_map.is_empty());
        assert_eq!(outcome.html, html);
    }
}
