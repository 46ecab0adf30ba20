//! Chinese numeral rendering for sequence indices (`一`, `十二`, `壹佰零伍`).

const LOWER_DIGITS: [char; 10] = ['零', '一', '二', '三', '四', '五', '六', '七', '八', '九'];
const UPPER_DIGITS: [char; 10] = ['零', '壹', '贰', '叁', '肆', '伍', '陆', '柒', '捌', '玖'];
const LOWER_UNITS: [&str; 4] = ["", "十", "百", "千"];
const UPPER_UNITS: [&str; 4] = ["", "拾", "佰", "仟"];
// Units for each group of four digits, lowest group first.
const SECTION_UNITS: [&str; 5] = ["", "万", "亿", "万亿", "亿亿"];
const NEGATIVE: &str = "负";

/// Value of a Chinese digit used as the first character of an index format.
/// `十` and `拾` count as ten.
pub fn numeral_value(c: char) -> Option<i64> {
    match c {
        '十' | '拾' => Some(10),
        _ => LOWER_DIGITS
            .iter()
            .chain(&UPPER_DIGITS[1..])
            .position(|&d| d == c)
            .map(|pos| if pos < 10 { pos as i64 } else { pos as i64 - 9 }),
    }
}

/// Whether a format starting with `c` asks for the financial (upper) digits.
pub fn is_upper(c: char) -> bool {
    c == '拾' || UPPER_DIGITS[1..].contains(&c)
}

pub fn to_chinese(number: i64, upper: bool) -> String {
    let (digits, units) = if upper {
        (&UPPER_DIGITS, &UPPER_UNITS)
    } else {
        (&LOWER_DIGITS, &LOWER_UNITS)
    };
    if number == 0 {
        return digits[0].to_string();
    }

    let mut magnitude = number.unsigned_abs();
    let mut sections = Vec::new();
    while magnitude > 0 {
        sections.push((magnitude % 10_000) as usize);
        magnitude /= 10_000;
    }

    let mut out = String::new();
    if number < 0 {
        out.push_str(NEGATIVE);
    }
    let body_start = out.len();
    let mut zero_pending = false;
    for (idx, &section) in sections.iter().enumerate().rev() {
        if section == 0 {
            zero_pending = out.len() > body_start;
            continue;
        }
        // A gap inside the number is read as a single zero.
        if zero_pending || (out.len() > body_start && section < 1000) {
            out.push(digits[0]);
        }
        zero_pending = false;
        out.push_str(&section_to_chinese(section, digits, units));
        out.push_str(SECTION_UNITS[idx]);
    }

    // 10..19 read as 十, 十一, ... without the leading one.
    if (10..20).contains(&number.unsigned_abs()) {
        let one = digits[1].len_utf8();
        out.replace_range(body_start..body_start + one, "");
    }
    out
}

fn section_to_chinese(section: usize, digits: &[char; 10], units: &[&str; 4]) -> String {
    let mut out = String::new();
    let mut zero_pending = false;
    for pos in (0..4).rev() {
        let digit = section / 10usize.pow(pos as u32) % 10;
        if digit == 0 {
            zero_pending = !out.is_empty();
            continue;
        }
        if zero_pending {
            out.push(digits[0]);
            zero_pending = false;
        }
        out.push(digits[digit]);
        out.push_str(units[pos]);
    }
    out
}
