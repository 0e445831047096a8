//! Regression corpus for the legacy output layout.
//!
//! Each case is the event sequence a SAX2 tokenizer reports for a small input
//! document, together with the exact text the legacy printer produced for it.
//! The input document is kept next to each case for reference.

use xmlcompat::{
    Document,
    dom::document_type::DocumentType,
    sax::{FEATURE_REPORT_START_END_ENTITY, replay::EventStream},
};

const XML_DECL: &str = "version='1.0' encoding='UTF-8' standalone='yes'";

struct CorpusCase {
    id: &'static str,
    indent: i32,
    /// The input document, for reference only.
    input: &'static str,
    events: fn(&mut EventStream),
    expected: &'static str,
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build a document from the recorded events. A failed parse keeps the
/// partial tree, which is what the legacy printer wrote out.
fn build(events: fn(&mut EventStream)) -> Document {
    let mut stream = EventStream::new();
    events(&mut stream);
    let mut doc = Document::new();
    if let Err(err) = doc.set_content(&mut stream) {
        log::debug!("{err}");
    }
    doc
}

fn run_corpus(cases: &[CorpusCase]) {
    init_logger();
    let mut failed = vec![];
    for case in cases {
        let doc = build(case.events);
        let left = doc.to_string_indent(case.indent);
        if left != case.expected {
            eprintln!(
                "//---- {} ---\ninput:\n{}\nleft:\n{}\nright:\n{}",
                case.id, case.input, left, case.expected
            );
            failed.push(case.id);
        }
    }
    assert!(failed.is_empty(), "failed cases: {failed:?}");
}

fn members_body(events: &mut EventStream, whitespace: bool) {
    let ws = |events: &mut EventStream| {
        if whitespace {
            events.characters("\n");
        }
    };
    events.start_element("", "members", &[]);
    ws(events);
    events
        .start_element("", "person", &[])
        .start_element("", "name", &[])
        .characters("Nadeshiko ")
        .start_element("", "family", &[])
        .characters("Kagamihara")
        .end_element("", "family")
        .end_element("", "name")
        .start_element("", "age", &[("", "born", "NORMAL")])
        .characters("16")
        .end_element("", "age")
        .end_element("", "person");
    ws(events);
    events
        .start_element("", "person", &[])
        .start_element("", "name", &[])
        // &Shimarin; is substituted by the tokenizer
        .characters("Rin Sima")
        .end_element("", "name")
        .start_element("", "age", &[("", "born", "EARLY")])
        .characters("15")
        .end_element("", "age")
        .end_element("", "person");
    ws(events);
    events.end_element("", "members");
}

fn members_dtd(events: &mut EventStream) {
    events
        .processing_instruction("xml", XML_DECL)
        .at(2, 1)
        .start_dtd("members", None, None)
        .element_decl("members", "(person+)")
        .element_decl("person", "(name, age)")
        .element_decl("name", "(#PCDATA|family)*")
        .element_decl("family", "(#PCDATA)")
        .element_decl("age", "(#PCDATA)")
        .attribute_decl("age", "born", "NOTATION", "#REQUIRED", None)
        .notation_decl("EARLY", Some("Born early"), None)
        .notation_decl("NORMAL", Some("Born normal"), None)
        .internal_entity_decl("Shimarin", "Rin Sima")
        .end_dtd()
        .at(13, 1);
}

fn html_body(events: &mut EventStream) {
    events
        .start_element("", "html", &[])
        .empty_element("", "head", &[])
        .start_element("", "body", &[])
        .characters(" \n ")
        .start_element("", "p", &[])
        .characters("abc")
        .empty_element("", "br", &[])
        .characters("  ")
        .start_element("", "span", &[])
        .characters("def")
        .end_element("", "span")
        .end_element("", "p")
        .end_element("", "body")
        .end_element("", "html");
}

fn core_properties(events: &mut EventStream, cp: &str, child: impl FnOnce(&mut EventStream)) {
    events
        .processing_instruction("xml", XML_DECL)
        .at(2, 1)
        .start_element(cp, "cp:coreProperties", &[]);
    child(events);
    events.end_element(cp, "cp:coreProperties");
}

fn created(events: &mut EventStream, uri: &str, qname: &str, attributes: &[(&str, &str, &str)]) {
    events
        .start_element(uri, qname, attributes)
        .characters("2021-01-28T12:39:00Z")
        .end_element(uri, qname);
}

fn revision(events: &mut EventStream) {
    events
        .start_element("http://cp", "cp:revision", &[])
        .characters("10")
        .end_element("http://cp", "cp:revision");
}

const ENTITY_TEXT: &str = "&<>]>]]>\"hoge\"'fuga'";

#[test]
fn simple_reader_corpus_test() {
    let cases = [
        CorpusCase {
            id: "white 1",
            indent: 0,
            input: "<html>\r\n<p>hoge</p>\r\n</html>\n",
            events: |events| {
                events
                    .start_element("", "html", &[])
                    .characters("\r\n")
                    .start_element("", "p", &[])
                    .characters("hoge")
                    .end_element("", "p")
                    .characters("\r\n")
                    .end_element("", "html");
            },
            expected: "<html>&#xd;\n<p>hoge</p>&#xd;\n</html>\n",
        },
        CorpusCase {
            id: "white 2",
            indent: -1,
            input: "<html><head></head><body> \n <p>abc<br/>  <span>def</span></p></body></html>",
            events: html_body,
            expected: "<html><head/><body> \n <p>abc<br/>  <span>def</span></p></body></html>",
        },
        CorpusCase {
            id: "pi in text",
            indent: 0,
            input: "<body><p>foo <?php echo $a; ?></p>\n",
            events: |events| {
                events
                    .start_element("", "body", &[])
                    .start_element("", "p", &[])
                    .characters("foo ")
                    .processing_instruction("php", "echo $a; ")
                    .end_element("", "p")
                    .characters("\n")
                    .at(2, 1);
            },
            expected: "<body>\n<p>foo <?php echo $a; ?>\n</p>\n</body>\n",
        },
        CorpusCase {
            id: "ns duplicate 1",
            indent: -1,
            input: "<?xml version='1.0' encoding='UTF-8' standalone='yes'?>\n<Properties xmlns=\"hoge\" xmlns:cp=\"cp_ns\"><vt:lpstr xmlns:vt=\"fuga\" cp:c1=\"v1\" cp:c2=\"v2\">title</vt:lpstr></Properties>",
            events: |events| {
                events
                    .processing_instruction("xml", XML_DECL)
                    .at(2, 1)
                    .start_element("hoge", "Properties", &[])
                    .start_element(
                        "fuga",
                        "vt:lpstr",
                        &[("cp_ns", "cp:c1", "v1"), ("cp_ns", "cp:c2", "v2")],
                    )
                    .characters("title")
                    .end_element("fuga", "vt:lpstr")
                    .end_element("hoge", "Properties");
            },
            expected: "<?xml version='1.0' encoding='UTF-8' standalone='yes'?>\n<Properties xmlns=\"hoge\"><vt:lpstr xmlns:vt=\"fuga\" xmlns:cp=\"cp_ns\" cp:c1=\"v1\" cp:c2=\"v2\">title</vt:lpstr></Properties>",
        },
        CorpusCase {
            id: "indent 0",
            indent: 0,
            input: "<html><head></head><body> \n <p>abc<br/>  <span>def</span></p></body></html>",
            events: html_body,
            expected: "<html>\n<head/>\n<body> \n <p>abc<br/>  <span>def</span>\n</p>\n</body>\n</html>\n",
        },
        CorpusCase {
            id: "indent 2",
            indent: 2,
            input: "<html><head></head><body> \n <p>abc<br/>  <span>def</span></p></body></html>",
            events: html_body,
            expected: "<html>\n  <head/>\n  <body> \n <p>abc<br/>  <span>def</span>\n    </p>\n  </body>\n</html>\n",
        },
        CorpusCase {
            id: "DTD 1",
            indent: -1,
            input: "<!DOCTYPE HTML>\n<html><head><title>camp</title></head><body>YURUCAMP</body></html>",
            events: |events| {
                events
                    .start_dtd("HTML", None, None)
                    .end_dtd()
                    .at(2, 1)
                    .start_element("", "html", &[])
                    .start_element("", "head", &[])
                    .start_element("", "title", &[])
                    .characters("camp")
                    .end_element("", "title")
                    .end_element("", "head")
                    .start_element("", "body", &[])
                    .characters("YURUCAMP")
                    .end_element("", "body")
                    .end_element("", "html");
            },
            expected: "<!DOCTYPE HTML>\n<html><head><title>camp</title></head><body>YURUCAMP</body></html>",
        },
        CorpusCase {
            id: "DTD 2",
            indent: -1,
            input: "<!DOCTYPE members [ ... ]> with whitespace between the persons",
            // this reader reports no declarations
            events: |events| {
                events
                    .processing_instruction("xml", XML_DECL)
                    .at(2, 1)
                    .start_dtd("members", None, None)
                    .end_dtd()
                    .at(13, 1);
                members_body(events, true);
            },
            expected: "<?xml version='1.0' encoding='UTF-8' standalone='yes'?>\n<!DOCTYPE members>\n<members>\n<person><name>Nadeshiko <family>Kagamihara</family></name><age born=\"NORMAL\">16</age></person>\n<person><name>Rin Sima</name><age born=\"EARLY\">15</age></person>\n</members>",
        },
        CorpusCase {
            id: "CDATA 1",
            indent: -1,
            input: "<p>\n  <div><![CDATA[hoge<\"'>&fuga]]></div>\n  <div>\n    <![CDATA[\n    hoge<\"'>\n    &fuga\n    ]]>\n  </div>\n</p>",
            events: |events| {
                events
                    .start_element("", "p", &[])
                    .characters("\n  ")
                    .start_element("", "div", &[])
                    .cdata("hoge<\"'>&fuga")
                    .end_element("", "div")
                    .characters("\n  ")
                    .start_element("", "div", &[])
                    .characters("\n    ")
                    .cdata("\n    hoge<\"'>\n    &fuga\n    ")
                    .characters("\n  ")
                    .end_element("", "div")
                    .characters("\n")
                    .end_element("", "p");
            },
            expected: "<p>\n  <div><![CDATA[hoge<\"'>&fuga]]></div>\n  <div>\n    <![CDATA[\n    hoge<\"'>\n    &fuga\n    ]]>\n  </div>\n</p>",
        },
        CorpusCase {
            id: "comment 1",
            indent: -1,
            input: "<p><div><!-- c1 -->\n body</div><!-- c2 --><div> <!--  c3  --> </div></p>",
            events: |events| {
                events
                    .start_element("", "p", &[])
                    .start_element("", "div", &[])
                    .comment(" c1 ")
                    .characters("\n body")
                    .end_element("", "div")
                    .comment(" c2 ")
                    .start_element("", "div", &[])
                    .characters(" ")
                    .comment("  c3  ")
                    .characters(" ")
                    .end_element("", "div")
                    .end_element("", "p");
            },
            expected: "<p><div><!-- c1 -->\n body</div><!-- c2 -->\n<div> <!--  c3  --> </div></p>",
        },
        CorpusCase {
            id: "entity 1",
            indent: -1,
            input: "<p>&amp;&lt;>]>]]&gt;\"hoge\"'fuga'</p>",
            events: |events| {
                events
                    .start_element("", "p", &[])
                    .characters(ENTITY_TEXT)
                    .end_element("", "p");
            },
            expected: "<p>&amp;&lt;>]>]]&gt;\"hoge\"'fuga'</p>",
        },
        CorpusCase {
            id: "entity 2",
            indent: -1,
            input: "<p>&amp;&lg;</p>",
            events: |events| {
                events
                    .start_element("", "p", &[])
                    .characters("&")
                    .skipped_entity("lg")
                    .end_element("", "p");
            },
            expected: "<p>&amp;&lg;</p>",
        },
        CorpusCase {
            id: "entity 3",
            indent: -1,
            input: "<p id=\"&amp;&lt;>]>]]&gt;&quot;hoge&quot;&apos;fuga&apos;\">&amp;&lg;&NotSubset;&colon;:</p>",
            events: |events| {
                events
                    .start_element("", "p", &[("", "id", ENTITY_TEXT)])
                    .characters("&")
                    .skipped_entity("lg")
                    .skipped_entity("NotSubset")
                    .skipped_entity("colon")
                    .characters(":")
                    .end_element("", "p");
            },
            expected: "<p id=\"&amp;&lt;>]>]]&gt;&quot;hoge&quot;'fuga'\">&amp;&lg;&NotSubset;&colon;:</p>",
        },
        CorpusCase {
            id: "ns 1",
            indent: -1,
            input: "<?xml version='1.0' encoding='UTF-8' standalone='yes'?>\n<Properties xmlns=\"hoge\"><vt:lpstr xmlns:vt=\"fuga\">title</vt:lpstr></Properties>",
            events: |events| {
                events
                    .processing_instruction("xml", XML_DECL)
                    .at(2, 1)
                    .start_element("hoge", "Properties", &[])
                    .start_element("fuga", "vt:lpstr", &[])
                    .characters("title")
                    .end_element("fuga", "vt:lpstr")
                    .end_element("hoge", "Properties");
            },
            expected: "<?xml version='1.0' encoding='UTF-8' standalone='yes'?>\n<Properties xmlns=\"hoge\"><vt:lpstr xmlns:vt=\"fuga\">title</vt:lpstr></Properties>",
        },
        CorpusCase {
            id: "ns 2",
            indent: -1,
            input: "<cp:coreProperties xmlns:cp=\"http://cp\" xmlns:dcterms=\"http://dcterms\" xmlns:xsi=\"http://xsi\"><cp:revision>10</cp:revision><dcterms:created xsi:type=\"dcterms:W3CDTF\">2021-01-28T12:39:00Z</dcterms:created></cp:coreProperties>",
            events: |events| {
                core_properties(events, "http://cp", |events| {
                    revision(events);
                    created(
                        events,
                        "http://dcterms",
                        "dcterms:created",
                        &[("http://xsi", "xsi:type", "dcterms:W3CDTF")],
                    );
                });
            },
            expected: "<?xml version='1.0' encoding='UTF-8' standalone='yes'?>\n<cp:coreProperties xmlns:cp=\"http://cp\"><cp:revision xmlns:cp=\"http://cp\">10</cp:revision><dcterms:created xmlns:dcterms=\"http://dcterms\" xmlns:xsi=\"http://xsi\" xsi:type=\"dcterms:W3CDTF\">2021-01-28T12:39:00Z</dcterms:created></cp:coreProperties>",
        },
        CorpusCase {
            id: "ns 3",
            indent: -1,
            input: "<cp:coreProperties xmlns:cp=\"http://cp\" xmlns:xsi=\"http://xsi\"><cp:revision>10</cp:revision><created xsi:type=\"dcterms:W3CDTF\">2021-01-28T12:39:00Z</created></cp:coreProperties>",
            events: |events| {
                core_properties(events, "http://cp", |events| {
                    revision(events);
                    created(
                        events,
                        "",
                        "created",
                        &[("http://xsi", "xsi:type", "dcterms:W3CDTF")],
                    );
                });
            },
            expected: "<?xml version='1.0' encoding='UTF-8' standalone='yes'?>\n<cp:coreProperties xmlns:cp=\"http://cp\"><cp:revision xmlns:cp=\"http://cp\">10</cp:revision><created xmlns:xsi=\"http://xsi\" xsi:type=\"dcterms:W3CDTF\">2021-01-28T12:39:00Z</created></cp:coreProperties>",
        },
        CorpusCase {
            id: "ns 4",
            indent: -1,
            input: "<cp:coreProperties xmlns:cp=\"http://cp\"><dcterms:created xmlns:dcterms=\"http://dcterms\" xsi:type=\"dcterms:W3CDTF\" xmlns:xsi=\"http://xsi\">2021-01-28T12:39:00Z</dcterms:created></cp:coreProperties>",
            // the tokenizer resolves `xsi:type` before it sees the declaration
            events: |events| {
                core_properties(events, "http://cp", |events| {
                    created(
                        events,
                        "http://dcterms",
                        "dcterms:created",
                        &[("", "xsi:type", "dcterms:W3CDTF")],
                    );
                });
            },
            expected: "<?xml version='1.0' encoding='UTF-8' standalone='yes'?>\n<cp:coreProperties xmlns:cp=\"http://cp\"><dcterms:created xmlns:dcterms=\"http://dcterms\" type=\"dcterms:W3CDTF\">2021-01-28T12:39:00Z</dcterms:created></cp:coreProperties>",
        },
        CorpusCase {
            id: "ns 5",
            indent: -1,
            input: "<cp:coreProperties xmlns:cp=\"http://cp\"><dcterms:created xmlns:dcterms=\"http://dcterms\" xmlns:xsi=\"http://xsi\" xsi:type=\"dcterms:W3CDTF\">2021-01-28T12:39:00Z</dcterms:created></cp:coreProperties>",
            events: |events| {
                core_properties(events, "http://cp", |events| {
                    created(
                        events,
                        "http://dcterms",
                        "dcterms:created",
                        &[("http://xsi", "xsi:type", "dcterms:W3CDTF")],
                    );
                });
            },
            expected: "<?xml version='1.0' encoding='UTF-8' standalone='yes'?>\n<cp:coreProperties xmlns:cp=\"http://cp\"><dcterms:created xmlns:dcterms=\"http://dcterms\" xmlns:xsi=\"http://xsi\" xsi:type=\"dcterms:W3CDTF\">2021-01-28T12:39:00Z</dcterms:created></cp:coreProperties>",
        },
        CorpusCase {
            id: "ns 6",
            indent: -1,
            input: "<cp:coreProperties xmlns:cp=\"&amp;&lt;>]>]]&gt;&quot;hoge&quot;&apos;fuga&apos;\"><dcterms:created xmlns:dcterms=\"http://dcterms\" xmlns:xsi=\"&amp;&lt;>]>]]&gt;&quot;hoge&quot;&apos;fuga&apos;\" xsi:type=\"dcterms:W3CDTF\">2021-01-28T12:39:00Z</dcterms:created></cp:coreProperties>",
            events: |events| {
                core_properties(events, ENTITY_TEXT, |events| {
                    created(
                        events,
                        "http://dcterms",
                        "dcterms:created",
                        &[(ENTITY_TEXT, "xsi:type", "dcterms:W3CDTF")],
                    );
                });
            },
            expected: "<?xml version='1.0' encoding='UTF-8' standalone='yes'?>\n<cp:coreProperties xmlns:cp=\"&amp;&lt;>]>]]&gt;&quot;hoge&quot;'fuga'\"><dcterms:created xmlns:dcterms=\"http://dcterms\" xmlns:xsi=\"&amp;&lt;>]>]]&gt;&quot;hoge&quot;'fuga'\" xsi:type=\"dcterms:W3CDTF\">2021-01-28T12:39:00Z</dcterms:created></cp:coreProperties>",
        },
        CorpusCase {
            id: "ns 7",
            indent: -1,
            input: "<cp:coreProperties xmlns:cp=\"http://cp\" xmlns:dcterms=\"http://dcterms\" xmlns:xsi=\"http://xsi\"><cp:revision>10</cp:revision><dcterms:created dcterms:type=\"dcterms:W3CDTF\">2021-01-28T12:39:00Z</dcterms:created></cp:coreProperties>",
            events: |events| {
                core_properties(events, "http://cp", |events| {
                    revision(events);
                    created(
                        events,
                        "http://dcterms",
                        "dcterms:created",
                        &[("http://dcterms", "dcterms:type", "dcterms:W3CDTF")],
                    );
                });
            },
            expected: "<?xml version='1.0' encoding='UTF-8' standalone='yes'?>\n<cp:coreProperties xmlns:cp=\"http://cp\"><cp:revision xmlns:cp=\"http://cp\">10</cp:revision><dcterms:created xmlns:dcterms=\"http://dcterms\" dcterms:type=\"dcterms:W3CDTF\">2021-01-28T12:39:00Z</dcterms:created></cp:coreProperties>",
        },
        CorpusCase {
            id: "ns 8",
            indent: -1,
            input: "<cp:coreProperties xmlns:cp=\"http://cp\">\n<dcterms:created xmlns:dcterms=\"http://dcterms\" dcterms:type=\"W3CDTF\" cp:type=\"dcterms:W3CDTF\">2021-01-28T12:39:00Z</dcterms:created>\n</cp:coreProperties>",
            events: |events| {
                core_properties(events, "http://cp", |events| {
                    events.characters("\n");
                    created(
                        events,
                        "http://dcterms",
                        "dcterms:created",
                        &[
                            ("http://dcterms", "dcterms:type", "W3CDTF"),
                            ("http://cp", "cp:type", "dcterms:W3CDTF"),
                        ],
                    );
                    events.characters("\n");
                });
            },
            expected: "<?xml version='1.0' encoding='UTF-8' standalone='yes'?>\n<cp:coreProperties xmlns:cp=\"http://cp\">\n<dcterms:created xmlns:dcterms=\"http://dcterms\" xmlns:cp=\"http://cp\" cp:type=\"dcterms:W3CDTF\" dcterms:type=\"W3CDTF\">2021-01-28T12:39:00Z</dcterms:created>\n</cp:coreProperties>",
        },
        CorpusCase {
            id: "encode 1",
            indent: -1,
            input: "<p id=\"ho\r\n\tge\">hoge</p>",
            events: |events| {
                events
                    .start_element("", "p", &[("", "id", "ho\r\n\tge")])
                    .characters("hoge")
                    .end_element("", "p");
            },
            expected: "<p id=\"ho&#xd;&#xa;&#x9;ge\">hoge</p>",
        },
        CorpusCase {
            id: "encode 2",
            indent: -1,
            input: "<Properties xmlns=\"hoge\"><vt:lpstr xmlns:vt=\"f\ru\ng\ta\">title</vt:lpstr></Properties>",
            events: |events| {
                events
                    .processing_instruction("xml", XML_DECL)
                    .at(2, 1)
                    .start_element("hoge", "Properties", &[])
                    .start_element("f\ru\ng\ta", "vt:lpstr", &[])
                    .characters("title")
                    .end_element("f\ru\ng\ta", "vt:lpstr")
                    .end_element("hoge", "Properties");
            },
            expected: "<?xml version='1.0' encoding='UTF-8' standalone='yes'?>\n<Properties xmlns=\"hoge\"><vt:lpstr xmlns:vt=\"f&#xd;u&#xa;g&#x9;a\">title</vt:lpstr></Properties>",
        },
    ];
    run_corpus(&cases);
}

#[test]
fn attribute_order_test() {
    let inputs: [&[(&str, &str, &str)]; 3] = [
        &[("", "id", "hoge"), ("", "css", "foo"), ("", "class", "fuga")],
        &[("", "class", "fuga"), ("", "css", "foo"), ("", "id", "hoge")],
        &[("", "css", "foo"), ("", "id", "hoge"), ("", "class", "fuga")],
    ];
    for attributes in inputs {
        let mut events = EventStream::new();
        events
            .start_element("", "p", attributes)
            .characters("order")
            .end_element("", "p");
        let mut doc = Document::new();
        doc.set_content(&mut events).unwrap();
        assert_eq!(
            doc.to_string_indent(-1),
            "<p class=\"fuga\" css=\"foo\" id=\"hoge\">order</p>"
        );
    }
}

#[test]
fn dtd_corpus_test() {
    // a tokenizer that drops whitespace-only text and reports declarations
    let cases = [
        CorpusCase {
            id: "indent",
            indent: 0,
            input: "<!DOCTYPE members [ ... ]>",
            events: |events| {
                members_dtd(events);
                members_body(events, false);
            },
            expected: "<?xml version='1.0' encoding='UTF-8' standalone='yes'?>\n<!DOCTYPE members [\n<!NOTATION EARLY PUBLIC 'Born early'>\n<!NOTATION NORMAL PUBLIC 'Born normal'>\n]>\n<members>\n<person>\n<name>Nadeshiko <family>Kagamihara</family>\n</name>\n<age born=\"NORMAL\">16</age>\n</person>\n<person>\n<name>Rin Sima</name>\n<age born=\"EARLY\">15</age>\n</person>\n</members>\n",
        },
        CorpusCase {
            id: "DTD 2",
            indent: -1,
            input: "<!DOCTYPE members [ ... ]>",
            events: |events| {
                members_dtd(events);
                members_body(events, false);
            },
            expected: "<?xml version='1.0' encoding='UTF-8' standalone='yes'?>\n<!DOCTYPE members [\n<!NOTATION EARLY PUBLIC 'Born early'>\n<!NOTATION NORMAL PUBLIC 'Born normal'>\n]>\n<members><person><name>Nadeshiko <family>Kagamihara</family></name><age born=\"NORMAL\">16</age></person><person><name>Rin Sima</name><age born=\"EARLY\">15</age></person></members>",
        },
    ];
    run_corpus(&cases);
}

#[test]
fn partial_tree_after_failure_test() {
    init_logger();
    let doc = build(|events| {
        events
            .start_element("", "body", &[])
            .start_element("", "p", &[])
            .characters("foo ")
            .end_element("", "p")
            .at(1, 19);
    });
    let mut stream = EventStream::new();
    stream.start_element("", "body", &[]).at(1, 19);
    let err = Document::new().set_content(&mut stream).unwrap_err();
    assert_eq!(err.message, "Unexpected end of file: body is not closed");
    assert_eq!((err.line, err.column), (1, 19));
    assert_eq!(doc.to_string_indent(-1), "<body><p>foo </p></body>");
}

#[test]
fn tag_mismatch_test() {
    init_logger();
    let mut events = EventStream::new();
    events
        .start_element("", "a", &[])
        .start_element("", "b", &[])
        .at(1, 10)
        .end_element("", "a");
    let mut doc = Document::new();
    let err = doc.set_content(&mut events).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Tag mismatch...Start:b, End:a, Line=1, Column=10"
    );
}

/// A namespaced list. `separator` is reported before each child of the list
/// and `closing` before its end tag, if they are not empty.
fn list_events(events: &mut EventStream, separator: &str, closing: &str) {
    let ws = |events: &mut EventStream, text: &str| {
        if !text.is_empty() {
            events.characters(text);
        }
    };
    events
        .processing_instruction("xml", XML_DECL)
        .at(2, 1)
        .start_element(
            "urn:m",
            "m:list",
            &[("", "lang", "en"), ("urn:x", "x:id", "1")],
        );
    ws(events, separator);
    events
        .start_element("urn:m", "m:item", &[])
        .characters("  ")
        .end_element("urn:m", "m:item");
    ws(events, separator);
    events.empty_element("", "sep", &[]);
    ws(events, separator);
    events
        .start_element("urn:m", "m:item", &[("urn:x", "x:ref", "1")])
        .characters("b")
        .end_element("urn:m", "m:item");
    ws(events, closing);
    events.end_element("urn:m", "m:list");
}

fn set_content(events: &mut EventStream) -> Document {
    let mut doc = Document::new();
    doc.set_content(events).unwrap();
    doc
}

#[test]
fn reparse_is_stable_test() {
    init_logger();
    for indent in [-1, 0, 2] {
        let mut events = EventStream::new();
        list_events(&mut events, "", "");
        let first = set_content(&mut events).to_string_indent(indent);

        // the whitespace a tokenizer reports for the rendered layout
        let line_break = if indent >= 0 { "\n" } else { "" };
        let separator = format!("{line_break}{:width$}", "", width = indent.max(0) as usize);
        let mut events = EventStream::new();
        list_events(&mut events, &separator, line_break);
        let doc = set_content(&mut events);
        let children = doc.document_element().unwrap().children().len();
        assert_eq!(children, if indent < 0 { 3 } else { 7 });

        let second = doc.to_string_indent(indent);
        assert_eq!(first, second, "indent {indent}");
    }

    let mut events = EventStream::new();
    list_events(&mut events, "", "");
    assert_eq!(
        set_content(&mut events).to_string_indent(2),
        concat!(
            "<?xml version='1.0' encoding='UTF-8' standalone='yes'?>\n",
            "<m:list xmlns:m=\"urn:m\" lang=\"en\" xmlns:x=\"urn:x\" x:id=\"1\">\n",
            "  <m:item xmlns:m=\"urn:m\">  </m:item>\n",
            "  <sep/>\n",
            "  <m:item xmlns:m=\"urn:m\" xmlns:x=\"urn:x\" x:ref=\"1\">b</m:item>\n",
            "</m:list>\n",
        )
    );
}

#[test]
fn entity_boundaries_are_rejected_test() {
    init_logger();
    let mut events = EventStream::new();
    events.empty_element("", "a", &[]);
    events.set_feature(FEATURE_REPORT_START_END_ENTITY, true);
    let mut doc = Document::new();
    assert!(doc.set_content(&mut events).is_err());
    assert!(doc.document_element().is_none());
}

#[test]
fn constructor_test() {
    let doc = Document::with_doctype(DocumentType::new(
        "type_name",
        Some("public_id"),
        Some("system_id"),
    ));
    let doctype = doc.doctype().unwrap();
    assert_eq!(doctype.name(), "type_name");
    assert_eq!(doctype.public_id(), Some("public_id"));
    assert_eq!(doctype.system_id(), Some("system_id"));

    let copied = doc.clone();
    let doctype = copied.doctype().unwrap();
    assert_eq!(doctype.name(), "type_name");
    assert_eq!(doctype.public_id(), Some("public_id"));
    assert_eq!(doctype.system_id(), Some("system_id"));

    let doc = Document::with_name("test_type_name");
    assert_eq!(doc.doctype().unwrap().name(), "test_type_name");
}

#[test]
fn deep_copy_is_independent_test() {
    let doc = build(html_body);
    let mut copied = doc.clone();
    copied.clear();
    assert!(copied.children().is_empty());
    assert_eq!(
        doc.to_string_indent(-1),
        "<html><head/><body> \n <p>abc<br/>  <span>def</span></p></body></html>"
    );
}
