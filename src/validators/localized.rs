//! src/validators/localized.rs

use crate::validators::{
    with_message, Email, Locale, MessageSource, MinLength, Required, WithMessage,
};

pub fn required(locale: Locale) -> WithMessage<Required> {
    let message = match locale {
        Locale::Ru => "Обязательное поле",
        Locale::En => "Required field",
    };
    with_message(message, Required)
}

pub fn email(locale: Locale) -> WithMessage<Email> {
    let message = match locale {
        Locale::Ru => "Некорректный email",
        Locale::En => "Invalid email",
    };
    with_message(message, Email)
}

pub fn min_length(locale: Locale, min: u64) -> WithMessage<MinLength> {
    let message = MessageSource::dynamic(move |params| {
        let min = params
            .get("min")
            .map(ToString::to_string)
            .unwrap_or_default();
        match locale {
            Locale::Ru => format!("Минимум {} символов.", min),
            Locale::En => format!("Minimum {} characters.", min),
        }
    });
    with_message(message, MinLength { min })
}
