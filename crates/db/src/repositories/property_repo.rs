//! Repository for the `properties` table.

use sqlx::{PgPool, QueryBuilder};
use stayhub_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use stayhub_core::types::EntityId;
use uuid::Uuid;

use crate::models::property::{
    CreateProperty, Property, PropertySearchParams, PropertySortBy, SortOrder, UpdateProperty,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, location, host_id, description, accommodation_type, amenities, price, images";

/// Provides CRUD and search operations for properties.
pub struct PropertyRepo;

impl PropertyRepo {
    /// Insert a new property with a fresh id, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProperty) -> Result<Property, sqlx::Error> {
        let query = format!(
            "INSERT INTO properties
                (id, name, location, host_id, description, accommodation_type, amenities, price, images)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Property>(&query)
            .bind(Uuid::new_v4())
            .bind(&input.name)
            .bind(&input.location)
            .bind(input.host_id)
            .bind(&input.description)
            .bind(&input.accommodation_type)
            .bind(&input.amenities)
            .bind(input.price)
            .bind(&input.images)
            .fetch_one(pool)
            .await
    }

    /// Find a property by id.
    pub async fn find_by_id(pool: &PgPool, id: EntityId) -> Result<Option<Property>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM properties WHERE id = $1");
        sqlx::query_as::<_, Property>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Search properties with conjunctive optional filters.
    ///
    /// Filter clauses are appended only for filters actually supplied:
    /// case-insensitive substring match on location and accommodation type,
    /// numeric bounds on price, array-overlap on amenities. No filters means
    /// the full listing. Pagination is clamped and applied last; the sort
    /// column comes from a fixed enum, never from raw input.
    pub async fn search(
        pool: &PgPool,
        params: &PropertySearchParams,
    ) -> Result<Vec<Property>, sqlx::Error> {
        let mut qb: QueryBuilder<sqlx::Postgres> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM properties WHERE 1 = 1"));

        if let Some(location) = params.location.as_deref() {
            qb.push(" AND location ILIKE ");
            qb.push_bind(format!("%{location}%"));
        }
        if let Some(price_min) = params.price_min {
            qb.push(" AND price >= ");
            qb.push_bind(price_min);
        }
        if let Some(price_max) = params.price_max {
            qb.push(" AND price <= ");
            qb.push_bind(price_max);
        }
        if let Some(accommodation_type) = params.accommodation_type.as_deref() {
            qb.push(" AND accommodation_type ILIKE ");
            qb.push_bind(format!("%{accommodation_type}%"));
        }
        if let Some(terms) = params.amenity_terms() {
            qb.push(" AND amenities && ");
            qb.push_bind(terms);
        }

        let sort_column = match params.sort_by {
            PropertySortBy::Name => "name",
            PropertySortBy::Price => "price",
        };
        let sort_direction = match params.sort_order {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        };
        qb.push(format!(" ORDER BY {sort_column} {sort_direction}"));

        qb.push(" LIMIT ");
        qb.push_bind(clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT));
        qb.push(" OFFSET ");
        qb.push_bind(clamp_offset(params.offset));

        qb.build_query_as::<Property>().fetch_all(pool).await
    }

    /// Update a property. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: EntityId,
        input: &UpdateProperty,
    ) -> Result<Option<Property>, sqlx::Error> {
        let query = format!(
            "UPDATE properties SET
                name = COALESCE($2, name),
                location = COALESCE($3, location),
                description = COALESCE($4, description),
                accommodation_type = COALESCE($5, accommodation_type),
                amenities = COALESCE($6, amenities),
                price = COALESCE($7, price),
                images = COALESCE($8, images)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Property>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.location)
            .bind(&input.description)
            .bind(&input.accommodation_type)
            .bind(&input.amenities)
            .bind(input.price)
            .bind(&input.images)
            .fetch_optional(pool)
            .await
    }
}
