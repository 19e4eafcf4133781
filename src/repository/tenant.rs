//! Repository implementation for tenants.

use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::tenant::{NewTenant, Tenant};
use crate::models::tenant::{NewTenant as DbNewTenant, Tenant as DbTenant};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, TenantReader, TenantWriter};

impl TenantReader for DieselRepository {
    fn get_tenant_by_id(&self, id: Uuid) -> RepositoryResult<Option<Tenant>> {
        use crate::schema::tenants;

        let mut conn = self.conn()?;
        let tenant = tenants::table
            .find(id)
            .first::<DbTenant>(&mut conn)
            .optional()?;

        Ok(tenant.map(Into::into))
    }

    fn get_tenant_by_api_key_hash(&self, hash: &str) -> RepositoryResult<Option<Tenant>> {
        use crate::schema::tenants;

        let mut conn = self.conn()?;
        let tenant = tenants::table
            .filter(tenants::api_key_hash.eq(hash))
            .first::<DbTenant>(&mut conn)
            .optional()?;

        Ok(tenant.map(Into::into))
    }

    fn get_tenant_by_name(&self, name: &str) -> RepositoryResult<Option<Tenant>> {
        use crate::schema::tenants;

        let mut conn = self.conn()?;
        let tenant = tenants::table
            .filter(tenants::name.eq(name))
            .order(tenants::created_at.asc())
            .first::<DbTenant>(&mut conn)
            .optional()?;

        Ok(tenant.map(Into::into))
    }
}

impl TenantWriter for DieselRepository {
    fn create_tenant(&self, new_tenant: &NewTenant) -> RepositoryResult<Tenant> {
        use crate::schema::tenants;

        let mut conn = self.conn()?;
        let db_new_tenant: DbNewTenant = new_tenant.into();

        let created = diesel::insert_into(tenants::table)
            .values(&db_new_tenant)
            .get_result::<DbTenant>(&mut conn)?;

        Ok(created.into())
    }
}
