//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use classmint::core::{process_documents, RenameOptions};
    use classmint::parsers::rewrite_html;

    use crate::common::{mapping, GUID_ID, HEX_CLASS};

    #[test]
    fn fragment_links_follow_renamed_ids() {
        let html = format!(
            r##"<a href="#{GUID_ID}">jump</a><a href="#about">about</a><section id="{GUID_ID}"></section><section id="about"></section>"##
        );

        let outcome = process_documents(&html, "", &RenameOptions::default()).unwrap();
        let name = outcome.id_map.get(GUID_ID).unwrap();

        assert_eq!(
            outcome.html,
            format!(
                r##"<a href="#{name}">jump</a><a href="#about">about</a><section id="{name}"></section><section id="about"></section>"##
            )
        );
    }

    #[test]
    fn svg_references_follow_renamed_ids() {
        let ids = mapping(&[("icon-a1b2c3d4e5", "i001_aaaaaa"), ("grad-a1b2c3d4e5", "i002_bbbbbb")]);
        let html = r##"<svg><use xlink:href="#icon-a1b2c3d4e5"/><rect fill="url(#grad-a1b2c3d4e5)"/></svg>"##;

        assert_eq!(
            rewrite_html(html, &mapping(&[]), &ids),
            r##"<svg><use xlink:href="#i001_aaaaaa"/><rect fill="url(#i002_bbbbbb)"/></svg>"##
        );
    }

    #[test]
    fn digit_leading_tokens_are_renamed_in_both_documents() {
        let hex_class = "1a2b3c4d5e6f1a2b3c4d5e6f1a2b3c4d";
        let html = format!(r#"<p class="{hex_class}" id="{GUID_ID}"></p>"#);
        let css = format!(".{hex_class}{{color:red}}#{GUID_ID}{{padding:0}}p{{margin:.5em;color:#1a2b3c}}");

        let outcome = process_documents(&html, &css, &RenameOptions::default()).unwrap();
        let class_name = outcome.class_map.get(hex_class).unwrap();
        let id_name = outcome.id_map.get(GUID_ID).unwrap();

        assert_eq!(outcome.html, format!(r#"<p class="{class_name}" id="{id_name}"></p>"#));
        assert_eq!(
            outcome.css,
            format!(".{class_name}{{color:red}}#{id_name}{{padding:0}}p{{margin:.5em;color:#1a2b3c}}")
        );
    }

    #[test]
    fn every_renamed_class_is_renamed_in_both_documents() {
        let html = format!(r#"<div class="wrap {HEX_CLASS}"><p class='{HEX_CLASS}'></p></div>"#);
        let css = format!(".{HEX_CLASS}>p,.wrap .{HEX_CLASS}:first-child{{}}");

        let outcome = process_documents(&html, &css, &RenameOptions::default()).unwrap();
        let name = outcome.class_map.get(HEX_CLASS).unwrap();

        assert!(!outcome.html.contains(HEX_CLASS));
        assert!(!outcome.css.contains(HEX_CLASS));
        assert_eq!(
            outcome.html,
            format!(r#"<div class="wrap {name}"><p class='{name}'></p></div>"#)
        );
        assert_eq!(outcome.css, format!(".{name}>p,.wrap .{name}:first-child{{}}"));
    }

    #[test]
    fn label_and_aria_references_follow_renamed_ids() {
        let ids = mapping(&[("field-x9y8z7w6v5", "i001_aaaaaa")]);
        let html = r#"<label for="field-x9y8z7w6v5">Name</label><input id="field-x9y8z7w6v5" aria-describedby="hint field-x9y8z7w6v5">"#;

        assert_eq!(
            rewrite_html(html, &mapping(&[]), &ids),
            r#"<label for="i001_aaaaaa">Name</label><input id="i001_aaaaaa" aria-describedby="hint i001_aaaaaa">"#
        );
    }

    #[test]
    fn markup_outside_values_is_untouched() {
        let classes = mapping(&[("x1", "c001_aaaaaa")]);
        let html = "<DIV  CLASS = \"x1\"\tdata-x=\"x1\">x1</DIV>";

        assert_eq!(
            rewrite_html(html, &classes, &mapping(&[])),
            "<DIV  CLASS = \"c001_aaaaaa\"\tdata-x=\"x1\">x1</DIV>"
        );
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
    use classmint::parsers::{rewrite_css, rewrite_fragment_references, rewrite_html};

    use crate::common::mapping;

    const HTML: &str = r##"<div class="card  big" id="main"><a href="#main">top</a><a href="#">x</a></div>
<style>.card{margin:0.5em}</style>"##;
    const CSS: &str = ".card, #main { background: url(img/bg.png) } @media (min-width: 10.5em) { .big {} }";

    #[test]
    fn absent_tokens_leave_html_unchanged() {
        let classes = mapping(&[("elsewhere", "c001_aaaaaa")]);
        let ids = mapping(&[("nowhere", "i001_bbbbbb")]);

        assert_eq!(rewrite_html(HTML, &classes, &ids), HTML);
    }

    #[test]
    fn absent_tokens_leave_css_unchanged() {
        let classes = mapping(&[("png", "c001_aaaaaa"), ("5em", "c002_bbbbbb")]);
        let ids = mapping(&[("nowhere", "i001_bbbbbb")]);

        assert_eq!(rewrite_css(CSS, &classes, &ids), CSS);
    }

    #[test]
    fn links_to_other_documents_are_untouched() {
        let ids = mapping(&[("main", "i001_aaaaaa")]);
        let html = r##"<a href="other.html#main">x</a><a href="https://example.com/#main">y</a>"##;

        assert_eq!(rewrite_fragment_references(html, &ids), html);
    }
}
