//! Boundary checks applied to a payload before it is written.
//!
//! Uniqueness and references are left to the store; these rules only look at
//! the record itself.

use model::{Agent, Lease, MaintenanceRequest, Money, Owner, Payment, Property, Tenant};

use crate::error::{DomainError, Result};

const YEAR_BUILT_RANGE: std::ops::RangeInclusive<i32> = 1800..=2100;

/// A record that can check its own field constraints.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DomainError::invalid(format!("{field} must not be blank")));
    }
    Ok(())
}

fn require_email(value: &str) -> Result<()> {
    require_text("email", value)?;
    match value.split_once('@') {
        Some((local, domain))
            if !local.trim().is_empty() && !domain.trim().is_empty() && !domain.contains('@') =>
        {
            Ok(())
        }
        _ => Err(DomainError::invalid(format!(
            "email '{value}' is not a valid address"
        ))),
    }
}

fn non_negative(field: &str, amount: Money) -> Result<()> {
    if amount.is_negative() {
        return Err(DomainError::invalid(format!(
            "{field} must not be negative, got {amount}"
        )));
    }
    Ok(())
}

impl Validate for Owner {
    fn validate(&self) -> Result<()> {
        require_text("firstName", &self.first_name)?;
        require_text("lastName", &self.last_name)?;
        require_email(&self.email)
    }
}

impl Validate for Tenant {
    fn validate(&self) -> Result<()> {
        require_text("firstName", &self.first_name)?;
        require_text("lastName", &self.last_name)?;
        require_email(&self.email)?;
        require_text("phoneNumber", &self.phone_number)
    }
}

impl Validate for Agent {
    fn validate(&self) -> Result<()> {
        require_text("firstName", &self.first_name)?;
        require_text("lastName", &self.last_name)?;
        require_email(&self.email)?;
        require_text("phoneNumber", &self.phone_number)
    }
}

impl Validate for Property {
    fn validate(&self) -> Result<()> {
        require_text("addressLine1", &self.address_line1)?;
        require_text("city", &self.city)?;
        require_text("stateProvince", &self.state_province)?;
        require_text("postalCode", &self.postal_code)?;
        require_text("country", &self.country)?;
        if let Some(year) = self.year_built
            && !YEAR_BUILT_RANGE.contains(&year)
        {
            return Err(DomainError::invalid(format!(
                "yearBuilt must be between {} and {}, got {year}",
                YEAR_BUILT_RANGE.start(),
                YEAR_BUILT_RANGE.end()
            )));
        }
        Ok(())
    }
}

impl Validate for Lease {
    fn validate(&self) -> Result<()> {
        if self.end_date < self.start_date {
            return Err(DomainError::invalid(format!(
                "endDate {} is before startDate {}",
                self.end_date, self.start_date
            )));
        }
        non_negative("monthlyRent", self.monthly_rent)?;
        if let Some(deposit) = self.security_deposit {
            non_negative("securityDeposit", deposit)?;
        }
        Ok(())
    }
}

impl Validate for Payment {
    fn validate(&self) -> Result<()> {
        non_negative("amount", self.amount)
    }
}

impl Validate for MaintenanceRequest {
    fn validate(&self) -> Result<()> {
        require_text("description", &self.description)?;
        if let Some(completed) = self.completed_date
            && completed < self.reported_date
        {
            return Err(DomainError::invalid(format!(
                "completedDate {completed} is before reportedDate {}",
                self.reported_date
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use model::{LeaseId, PropertyId, PropertyType, TenantId};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn assert_invalid(result: Result<()>, fragment: &str) {
        match result {
            Err(DomainError::InvalidArgument(message)) => {
                assert!(message.contains(fragment), "message was: {message}")
            }
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn owner_requires_names_and_email() {
        assert!(Owner::new("Ann", "Lee", "ann@example.com").validate().is_ok());
        assert_invalid(Owner::new(" ", "Lee", "ann@example.com").validate(), "firstName");
        assert_invalid(Owner::new("Ann", "Lee", "").validate(), "email");
    }

    #[test]
    fn email_needs_single_at_with_both_parts() {
        for bad in ["ann.example.com", "@example.com", "ann@", "a@b@c"] {
            assert_invalid(Owner::new("Ann", "Lee", bad).validate(), "email");
        }
    }

    #[test]
    fn tenant_requires_phone_number() {
        let tenant = Tenant::new("Jane", "Smith", "jane@example.com", "");
        assert_invalid(tenant.validate(), "phoneNumber");
    }

    #[test]
    fn lease_end_may_equal_start_but_not_precede_it() {
        let mut lease = Lease::new(
            PropertyId::new(1),
            TenantId::new(1),
            date(2025, 1, 1),
            date(2025, 1, 1),
            Money::from_units(1000),
        );
        assert!(lease.validate().is_ok());

        lease.end_date = date(2024, 12, 31);
        assert_invalid(lease.validate(), "endDate");
    }

    #[test]
    fn negative_amounts_are_rejected() {
        let payment = Payment::new(LeaseId::new(1), date(2025, 1, 1), Money::from_cents(-1));
        assert_invalid(payment.validate(), "amount");

        let mut lease = Lease::new(
            PropertyId::new(1),
            TenantId::new(1),
            date(2025, 1, 1),
            date(2025, 6, 1),
            Money::zero(),
        );
        lease.security_deposit = Some(Money::from_units(-5));
        assert_invalid(lease.validate(), "securityDeposit");
    }

    #[test]
    fn property_year_built_is_bounded() {
        let mut property =
            Property::new("1 Main St", "Springfield", "IL", "62701", "USA", PropertyType::Condo);
        property.year_built = Some(1799);
        assert_invalid(property.validate(), "yearBuilt");

        property.year_built = Some(1920);
        assert!(property.validate().is_ok());
    }

    #[test]
    fn maintenance_completion_not_before_report() {
        let mut request = MaintenanceRequest::new(PropertyId::new(1), date(2025, 3, 10), "Leak");
        request.completed_date = Some(date(2025, 3, 9));
        assert_invalid(request.validate(), "completedDate");

        request.completed_date = Some(date(2025, 3, 10));
        assert!(request.validate().is_ok());
    }
}
