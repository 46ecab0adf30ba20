use super::{IndexProgram, format_index};
use crate::test_utils;
use pretty_assertions::assert_eq;

fn eval(expr: &str, index: i64) -> i64 {
    IndexProgram::compile(expr).eval(index)
}

#[test]
fn test_arithmetic() {
    assert_eq!(eval("i+1", 0), 1);
    assert_eq!(eval("2*i+1", 1), 3);
    assert_eq!(eval("i*3-2", 2), 4);
    assert_eq!(eval("(i+1)*2", 3), 8);
    assert_eq!(eval("10-i", 4), 6);
    assert_eq!(eval("7", 99), 7);
}

#[test]
fn test_precedence() {
    assert_eq!(eval("1+2*3", 0), 7);
    assert_eq!(eval("(1+2)*3", 0), 9);
    assert_eq!(eval("8-2-1", 0), 5);
    assert_eq!(eval("12/3/2", 0), 2);
}

#[test]
fn test_implicit_multiplication() {
    assert_eq!(eval("2i", 5), 10);
    assert_eq!(eval("i2", 5), 10);
    assert_eq!(eval("2i+1", 1), 3);
    assert_eq!(eval("3I-1", 2), 5);
    assert_eq!(eval("2i3", 1), 6);
}

#[test]
fn test_whitespace_is_ignored() {
    assert_eq!(eval(" 2 i + 1 ", 1), 3);
    assert_eq!(eval("i\t*\t2", 4), 8);
}

#[test]
fn test_unary_signs() {
    assert_eq!(eval("-i+10", 3), 7);
    assert_eq!(eval("--i", 3), 3);
    assert_eq!(eval("+i", 3), 3);
    assert_eq!(eval("2*-i", 3), -6);
}

#[test]
fn test_decimals_round_half_to_even() {
    assert_eq!(eval("i/2", 1), 0);
    assert_eq!(eval("i/2", 3), 2);
    assert_eq!(eval("i/2", 5), 2);
    assert_eq!(eval("i*1.5", 1), 2);
    assert_eq!(eval("i*0.4", 4), 2);
    assert_eq!(eval(".5+i", 2), 2);
}

#[test]
fn test_invalid_expressions_fall_back_to_index() {
    test_utils::init_test_logging();
    for expr in ["", "   ", "i+", "(i+1", "i)", "2**i", "ii", "x+1", "1.2.3", ".", "i+name"] {
        let program = IndexProgram::compile(expr);
        assert!(!program.is_valid(), "{expr:?} should be rejected");
        assert_eq!(program.eval(7), 7, "{expr:?}");
    }
}

#[test]
fn test_non_finite_results_fall_back_to_index() {
    assert_eq!(eval("i/0", 3), 3);
    assert_eq!(eval("0/0", 3), 3);
    assert_eq!(eval("i*99999999999999999999999", 3), 3);
}

#[test]
fn test_deep_nesting_is_rejected() {
    let deep = format!("{}i{}", "(".repeat(200), ")".repeat(200));
    assert_eq!(IndexProgram::compile(&deep).eval(4), 4);
    let shallow = format!("{}i{}", "(".repeat(10), ")".repeat(10));
    assert!(IndexProgram::compile(&shallow).is_valid());
}

#[test]
fn test_program_is_reusable() {
    let program = IndexProgram::compile("2i+1");
    let results: Vec<i64> = (0..4).map(|i| program.eval(i)).collect();
    assert_eq!(results, vec![1, 3, 5, 7]);
    assert_eq!(program.source(), "2i+1");
}

#[test]
fn test_render_applies_format() {
    let program = IndexProgram::compile("2i+1");
    assert_eq!(program.render(1, Some("00")), "03");
    assert_eq!(IndexProgram::compile("oops").render(1, Some("000")), "001");
}

#[test]
fn test_format_index_plain() {
    assert_eq!(format_index(5, None), "5");
    assert_eq!(format_index(5, Some("")), "5");
    assert_eq!(format_index(-3, None), "-3");
}

#[test]
fn test_format_index_offset_and_padding() {
    assert_eq!(format_index(0, Some("00")), "00");
    assert_eq!(format_index(0, Some("01")), "01");
    assert_eq!(format_index(0, Some("001")), "001");
    assert_eq!(format_index(9, Some("01")), "10");
    assert_eq!(format_index(123, Some("00")), "123");
    assert_eq!(format_index(0, Some("5")), "5");
    assert_eq!(format_index(2, Some("10")), "03");
}

#[test]
fn test_format_index_clamps_negative() {
    assert_eq!(format_index(-5, Some("00")), "00");
    assert_eq!(format_index(-5, Some("abc")), "0");
}

#[test]
fn test_format_index_non_digit_format() {
    assert_eq!(format_index(7, Some("abc")), "7");
    assert_eq!(format_index(7, Some("0a")), "07");
}

#[test]
fn test_format_index_chinese() {
    assert_eq!(format_index(0, Some("一")), "一");
    assert_eq!(format_index(11, Some("一")), "十二");
    assert_eq!(format_index(0, Some("零")), "零");
    assert_eq!(format_index(0, Some("壹")), "壹");
    assert_eq!(format_index(1, Some("壹")), "贰");
    assert_eq!(format_index(0, Some("十")), "十");
    assert_eq!(format_index(0, Some("拾")), "拾");
    assert_eq!(format_index(5, Some("十")), "十五");
}
