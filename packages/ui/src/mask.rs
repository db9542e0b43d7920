//! Display masks for CPF, telefone and currency values.
//!
//! Inputs store unmasked digits; these helpers only shape values for
//! display (lists, modals). A value that does not fit the mask is shown
//! as-is rather than mangled.

/// Keep only ASCII digits, capped at `max` characters. Applied while typing
/// so the stored value is always the unmasked form.
pub fn digits(value: &str, max: usize) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).take(max).collect()
}

/// `12345678901` → `123.456.789-01`. Non-11-digit values pass through.
pub fn format_cpf(cpf: &str) -> String {
    if cpf.len() != 11 || !cpf.chars().all(|c| c.is_ascii_digit()) {
        return cpf.to_string();
    }
    format!("{}.{}.{}-{}", &cpf[0..3], &cpf[3..6], &cpf[6..9], &cpf[9..11])
}

/// `49999990000` → `(49) 99999-0000`; ten-digit numbers get the short local
/// part. Anything else passes through.
pub fn format_telefone(telefone: &str) -> String {
    if !telefone.chars().all(|c| c.is_ascii_digit()) {
        return telefone.to_string();
    }
    match telefone.len() {
        11 => format!("({}) {}-{}", &telefone[0..2], &telefone[2..7], &telefone[7..11]),
        10 => format!("({}) {}-{}", &telefone[0..2], &telefone[2..6], &telefone[6..10]),
        _ => telefone.to_string(),
    }
}

/// Currency display, e.g. `R$ 30.00`.
pub fn format_valor(valor: f64) -> String {
    format!("R$ {valor:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_strips_mask_characters() {
        assert_eq!(digits("123.456.789-01", 11), "12345678901");
        assert_eq!(digits("(49) 99999-0000", 11), "49999990000");
        assert_eq!(digits("123456789012345", 11), "12345678901");
    }

    #[test]
    fn cpf_mask() {
        assert_eq!(format_cpf("12345678901"), "123.456.789-01");
        assert_eq!(format_cpf("123"), "123");
        assert_eq!(format_cpf("1234567890a"), "1234567890a");
    }

    #[test]
    fn telefone_mask() {
        assert_eq!(format_telefone("49999990000"), "(49) 99999-0000");
        assert_eq!(format_telefone("4933330000"), "(49) 3333-0000");
        assert_eq!(format_telefone("999"), "999");
    }

    #[test]
    fn valor_mask() {
        assert_eq!(format_valor(30.0), "R$ 30.00");
        assert_eq!(format_valor(9.5), "R$ 9.50");
    }
}
