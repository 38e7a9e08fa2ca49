use sqlx::PgPool;

#[derive(Clone)]
pub struct SqlxUserRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxBasicInformationRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxAcademicRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxEmploymentRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxStaffProfileRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxNewsRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxLocationRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxReportRepo {
    pub pool: PgPool,
}

/// OFFSET for a 1-based `page`.
pub(crate) fn page_offset(page: u32, per_page: u32) -> i64 {
    (page.saturating_sub(1) as i64) * (per_page as i64)
}

#[cfg(test)]
mod tests {
    use super::page_offset;

    #[test]
    fn page_zero_and_one_start_at_the_beginning() {
        assert_eq!(page_offset(0, 20), 0);
        assert_eq!(page_offset(1, 20), 0);
        assert_eq!(page_offset(3, 20), 40);
    }
}
