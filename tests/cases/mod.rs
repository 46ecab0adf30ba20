use once_cell::sync::Lazy;
use renamer::{Engine, EngineOptions, EvaluationContext, ExecutionMode};

pub static COMPILED: Lazy<Engine> = Lazy::new(Engine::default);

pub static INTERPRETED: Lazy<Engine> = Lazy::new(|| {
    Engine::new(EngineOptions {
        mode: ExecutionMode::Interpreted,
        ..EngineOptions::default()
    })
});

/// Render with both engines and require them to agree.
pub fn render(template: &str, ctx: &EvaluationContext) -> String {
    let compiled = COMPILED.render(template, ctx).expect("compiled render failed");
    let interpreted = INTERPRETED
        .render(template, ctx)
        .expect("interpreted render failed");
    assert_eq!(compiled, interpreted, "engines disagree on {template:?}");
    compiled
}

#[macro_export]
macro_rules! test_case {
    (
        $name:ident,
        template: $template:expr,
        file: ($file:expr, $ext:expr),
        index: ($index:expr, $total:expr),
        expected: $expected:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            let ctx = renamer::EvaluationContext::new($file, $ext).with_index($index, $total);
            pretty_assertions::assert_eq!(cases::render($template, &ctx), $expected);
        }
    };
}
