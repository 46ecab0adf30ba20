use super::*;
use crate::{evaluator, parser, values::ImageInfo};
use pretty_assertions::assert_eq;

fn both(template: &str, ctx: &EvaluationContext) -> (Result<String, EvalError>, Result<String, EvalError>) {
    let parsed = parser::parse(template);
    (
        compile(&parsed).render(ctx),
        evaluator::evaluate_template(&parsed, ctx),
    )
}

#[test]
fn test_compiled_matches_evaluator() {
    let ctx = EvaluationContext::new("Holiday Photo", "jpg")
        .with_index(4, 12)
        .with_dir_name("album")
        .with_size(5 * 1024 * 1024)
        .with_image(ImageInfo::new(4000, 3000));
    let templates = [
        "",
        "plain",
        "{name}_{i:000}.{ext}",
        "{2i+1:01}",
        "{iv:壹}",
        "{name.lower.replace(' ', '-')}",
        "{name[:7].upper}",
        "{name[-5:]}",
        "{dirname}/{fullname}",
        "{size:1mb} {image:wxh}",
        "{nope} and {nope:00}",
        "{ {name} }",
        "{name.padLeft(i, '*')}",
        "{i.format('01')}",
        "unterminated {name",
    ];
    for template in templates {
        let (compiled, evaluated) = both(template, &ctx);
        assert_eq!(compiled, evaluated, "{template}");
        assert!(compiled.is_ok(), "{template}");
    }
}

#[test]
fn test_errors_match_evaluator() {
    let ctx = EvaluationContext::new("a", "b");
    for template in ["{size.upper}", "{name.reverse()}", "{i.trim}", "x{name.upper.format('1')}"] {
        let (compiled, evaluated) = both(template, &ctx);
        assert!(compiled.is_err(), "{template}");
        assert_eq!(compiled, evaluated, "{template}");
    }
}

#[test]
fn test_constant_templates() {
    assert!(compile(&parser::parse("just text")).is_constant());
    assert!(compile(&parser::parse("{unknown}-x")).is_constant());
    assert!(!compile(&parser::parse("{name}")).is_constant());

    let compiled = compile(&parser::parse("a{missing}b"));
    assert_eq!(format!("{compiled:?}"), r#"["a{missing}b"]"#);
}

#[test]
fn test_compiled_template_is_reusable() {
    let compiled = compile(&parser::parse("{name}-{i:01}"));
    let rendered: Vec<String> = ["x", "y", "z"]
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let ctx = EvaluationContext::new(*name, "txt").with_index(index as i64, 3);
            compiled.render(&ctx).unwrap()
        })
        .collect();
    assert_eq!(rendered, vec!["x-01", "y-02", "z-03"]);
}

#[test]
fn test_compiled_template_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CompiledTemplate>();
}

#[test]
fn test_compile_single_node() {
    let ctx = EvaluationContext::new("abc", "txt");
    let template = parser::parse("{name.upper}");
    let expr = compile_node(&template.nodes[0]);
    assert_eq!(expr(&ctx).unwrap(), crate::values::Value::from("ABC"));
}
