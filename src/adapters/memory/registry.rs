//! In-memory lookup registry.
//!
//! One seedable store implementing every read-only lookup port, so tests and
//! embedders can wire a complete pipeline from a single value. Reads take a
//! shared lock; seeding takes the write lock.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::checkout::{
    Discount, Employee, Enrollment, LookupError, SeatHolder, Voucher, WaitlistEntry,
};
use crate::domain::foundation::{CompanyId, EmployeeId, EventSessionId, Timestamp};
use crate::ports::{
    DiscountLookup, EmployeeDirectory, EnrollmentLookup, PermissionChecker, VoucherLookup,
    WaitlistLookup,
};

#[derive(Debug, Default)]
struct RegistryState {
    employees: Vec<Employee>,
    enrollments: Vec<Enrollment>,
    waitlist: Vec<WaitlistEntry>,
    discounts: HashMap<String, Discount>,
    discount_usage: HashMap<String, u32>,
    vouchers: HashMap<CompanyId, Vec<Voucher>>,
    voucher_usage: HashMap<CompanyId, u32>,
    roles: HashMap<EmployeeId, HashSet<String>>,
    failing_ports: HashSet<&'static str>,
}

/// Seedable in-memory implementation of all lookup ports.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    state: RwLock<RegistryState>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_employee(&self, employee: Employee) {
        self.write().employees.push(employee);
    }

    pub fn seed_enrollment(&self, enrollment: Enrollment) {
        self.write().enrollments.push(enrollment);
    }

    pub fn seed_waitlist_entry(&self, entry: WaitlistEntry) {
        self.write().waitlist.push(entry);
    }

    pub fn seed_discount(&self, discount: Discount) {
        self.write()
            .discounts
            .insert(discount.code.clone(), discount);
    }

    pub fn seed_discount_usage(&self, code: impl Into<String>, uses: u32) {
        self.write().discount_usage.insert(code.into(), uses);
    }

    pub fn seed_voucher(&self, company: CompanyId, voucher: Voucher) {
        self.write().vouchers.entry(company).or_default().push(voucher);
    }

    pub fn seed_voucher_usage(&self, company: CompanyId, seats_used: u32) {
        self.write().voucher_usage.insert(company, seats_used);
    }

    pub fn grant_role(&self, employee: EmployeeId, role: impl Into<String>) {
        self.write().roles.entry(employee).or_default().insert(role.into());
    }

    /// Makes every call on the named port fail with a [`LookupError`].
    pub fn fail_port(&self, port: &'static str) {
        self.write().failing_ports.insert(port);
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, RegistryState> {
        self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn read(&self, port: &'static str) -> Result<std::sync::RwLockReadGuard<'_, RegistryState>, LookupError> {
        let state = self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        if state.failing_ports.contains(port) {
            return Err(LookupError::new(port, "injected failure"));
        }
        Ok(state)
    }
}

#[async_trait]
impl EmployeeDirectory for InMemoryRegistry {
    async fn find_by_email_and_company(
        &self,
        email: &str,
        company: &CompanyId,
    ) -> Result<Option<Employee>, LookupError> {
        let state = self.read("employee_directory")?;
        let needle = email.trim().to_lowercase();
        Ok(state
            .employees
            .iter()
            .find(|employee| {
                employee.company_id == *company
                    && employee
                        .email
                        .as_deref()
                        .is_some_and(|candidate| candidate.trim().to_lowercase() == needle)
            })
            .cloned())
    }
}

#[async_trait]
impl EnrollmentLookup for InMemoryRegistry {
    async fn find_for_employee(
        &self,
        session: &EventSessionId,
        employee: &EmployeeId,
    ) -> Result<Option<Enrollment>, LookupError> {
        let state = self.read("enrollments")?;
        Ok(state
            .enrollments
            .iter()
            .find(|enrollment| {
                enrollment.session_id == *session
                    && enrollment.holder
                        == SeatHolder::Employee {
                            employee_id: *employee,
                        }
            })
            .cloned())
    }

    async fn find_for_email(
        &self,
        session: &EventSessionId,
        email: &str,
    ) -> Result<Option<Enrollment>, LookupError> {
        let state = self.read("enrollments")?;
        let needle = email.trim().to_lowercase();
        Ok(state
            .enrollments
            .iter()
            .find(|enrollment| {
                enrollment.session_id == *session
                    && matches!(
                        &enrollment.holder,
                        SeatHolder::Email { email } if email.trim().to_lowercase() == needle
                    )
            })
            .cloned())
    }

    async fn count_confirmed(&self, session: &EventSessionId) -> Result<u32, LookupError> {
        let state = self.read("enrollments")?;
        Ok(state
            .enrollments
            .iter()
            .filter(|enrollment| enrollment.session_id == *session)
            .count() as u32)
    }
}

#[async_trait]
impl WaitlistLookup for InMemoryRegistry {
    async fn find_for_employee(
        &self,
        session: &EventSessionId,
        employee: &EmployeeId,
    ) -> Result<Option<WaitlistEntry>, LookupError> {
        let state = self.read("waitlist")?;
        Ok(state
            .waitlist
            .iter()
            .find(|entry| {
                entry.session_id == *session
                    && entry.holder
                        == SeatHolder::Employee {
                            employee_id: *employee,
                        }
            })
            .cloned())
    }

    async fn find_for_email(
        &self,
        session: &EventSessionId,
        email: &str,
    ) -> Result<Option<WaitlistEntry>, LookupError> {
        let state = self.read("waitlist")?;
        let needle = email.trim().to_lowercase();
        Ok(state
            .waitlist
            .iter()
            .find(|entry| {
                entry.session_id == *session
                    && matches!(
                        &entry.holder,
                        SeatHolder::Email { email } if email.trim().to_lowercase() == needle
                    )
            })
            .cloned())
    }
}

#[async_trait]
impl DiscountLookup for InMemoryRegistry {
    async fn find_by_code(&self, code: &str) -> Result<Option<Discount>, LookupError> {
        let state = self.read("discounts")?;
        Ok(state.discounts.get(code).cloned())
    }

    async fn count_usage(&self, code: &str) -> Result<u32, LookupError> {
        let state = self.read("discounts")?;
        Ok(state.discount_usage.get(code).copied().unwrap_or(0))
    }
}

#[async_trait]
impl VoucherLookup for InMemoryRegistry {
    async fn find_active_for_company(
        &self,
        company: &CompanyId,
        as_of: Timestamp,
    ) -> Result<Vec<Voucher>, LookupError> {
        let state = self.read("vouchers")?;
        Ok(state
            .vouchers
            .get(company)
            .map(|vouchers| {
                vouchers
                    .iter()
                    .filter(|voucher| voucher.is_redeemable_at(as_of))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn count_usage(&self, company: &CompanyId) -> Result<u32, LookupError> {
        let state = self.read("vouchers")?;
        Ok(state.voucher_usage.get(company).copied().unwrap_or(0))
    }
}

#[async_trait]
impl PermissionChecker for InMemoryRegistry {
    async fn has_role(&self, employee: &EmployeeId, role: &str) -> Result<bool, LookupError> {
        let state = self.read("permissions")?;
        Ok(state
            .roles
            .get(employee)
            .is_some_and(|roles| roles.contains(role)))
    }
}
