// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, bail};

use crate::{DEFAULT_QUANTITY, MAX_QUANTITY, MIN_QUANTITY};

pub const MISSING_DESCRIPTION: &str = "please enter a description";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddItemForm {
    pub description: String,
    pub quantity: u32,
}

impl Default for AddItemForm {
    fn default() -> Self {
        Self::blank(DEFAULT_QUANTITY)
    }
}

impl AddItemForm {
    pub fn new(description: impl Into<String>, quantity: u32) -> Self {
        Self {
            description: description.into(),
            quantity,
        }
    }

    pub fn blank(quantity: u32) -> Self {
        Self {
            description: String::new(),
            quantity: clamp_quantity(quantity),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.description.is_empty() {
            bail!(MISSING_DESCRIPTION);
        }
        if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&self.quantity) {
            bail!(
                "quantity must be between {MIN_QUANTITY} and {MAX_QUANTITY}, got {}",
                self.quantity
            );
        }
        Ok(())
    }

    pub fn step_quantity(&mut self, delta: i64) {
        let stepped = i64::from(self.quantity) + delta;
        self.quantity = clamp_quantity(u32::try_from(stepped.max(0)).unwrap_or(MAX_QUANTITY));
    }
}

pub fn clamp_quantity(quantity: u32) -> u32 {
    quantity.clamp(MIN_QUANTITY, MAX_QUANTITY)
}

#[cfg(test)]
mod tests {
    use super::{AddItemForm, MISSING_DESCRIPTION, clamp_quantity};

    #[test]
    fn default_form_is_blank_with_quantity_one() {
        let form = AddItemForm::default();
        assert!(form.description.is_empty());
        assert_eq!(form.quantity, 1);
    }

    #[test]
    fn validation_rejects_empty_description() {
        let error = AddItemForm::new("", 1)
            .validate()
            .expect_err("empty description should fail");
        assert_eq!(error.to_string(), MISSING_DESCRIPTION);
    }

    #[test]
    fn validation_accepts_whitespace_description() {
        assert!(AddItemForm::new("   ", 3).validate().is_ok());
    }

    #[test]
    fn validation_rejects_out_of_range_quantity() {
        let error = AddItemForm::new("Tent", 0)
            .validate()
            .expect_err("zero quantity should fail");
        assert!(error.to_string().contains("between 1 and 100"));
        assert!(AddItemForm::new("Tent", 101).validate().is_err());
    }

    #[test]
    fn validation_accepts_valid_payload() {
        assert!(AddItemForm::new("Sunscreen", 1).validate().is_ok());
        assert!(AddItemForm::new("Socks", 100).validate().is_ok());
    }

    #[test]
    fn quantity_steps_stay_in_range() {
        let mut form = AddItemForm::default();
        form.step_quantity(-1);
        assert_eq!(form.quantity, 1);
        form.step_quantity(10);
        assert_eq!(form.quantity, 11);
        form.step_quantity(500);
        assert_eq!(form.quantity, 100);
    }

    #[test]
    fn blank_form_clamps_quantity() {
        assert_eq!(AddItemForm::blank(0).quantity, 1);
        assert_eq!(AddItemForm::blank(250).quantity, 100);
        assert_eq!(clamp_quantity(42), 42);
    }
}
