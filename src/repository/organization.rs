//! Repository implementation for the organization directory.

use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::organization::{NewOrganization, Organization};
use crate::models::organization::{
    NewOrganization as DbNewOrganization, Organization as DbOrganization,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, OrganizationReader, OrganizationWriter};

impl OrganizationReader for DieselRepository {
    fn get_organization_by_id(&self, id: Uuid) -> RepositoryResult<Option<Organization>> {
        use crate::schema::organizations;

        let mut conn = self.conn()?;
        let org = organizations::table
            .find(id)
            .first::<DbOrganization>(&mut conn)
            .optional()?;

        Ok(org.map(Into::into))
    }

    fn get_organization_by_domain(&self, domain: &str) -> RepositoryResult<Option<Organization>> {
        use crate::schema::organizations;

        let mut conn = self.conn()?;
        let org = organizations::table
            .filter(organizations::email_domain.eq(domain))
            .first::<DbOrganization>(&mut conn)
            .optional()?;

        Ok(org.map(Into::into))
    }
}

impl OrganizationWriter for DieselRepository {
    fn create_organization(&self, new_org: &NewOrganization) -> RepositoryResult<Organization> {
        use crate::schema::organizations;

        let mut conn = self.conn()?;
        let db_new_org: DbNewOrganization = new_org.into();

        let created = diesel::insert_into(organizations::table)
            .values(&db_new_org)
            .get_result::<DbOrganization>(&mut conn)?;

        Ok(created.into())
    }

    fn delete_organization(&self, id: Uuid) -> RepositoryResult<usize> {
        use crate::schema::organizations;

        let mut conn = self.conn()?;
        let affected = diesel::delete(organizations::table.find(id)).execute(&mut conn)?;

        Ok(affected)
    }
}
