use cakecalc_model::{
    Cake, CakeShape, CakeSize, CakeType, Filling, Frosting, Ingredient, Role, Template,
};
use cakecalc_pricing::preview::SizeLookup;
use cakecalc_pricing::quantity::IngredientCosts;
use dashmap::DashMap;
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicI64, Ordering};

// ---------------------------------------------------------------------------
// In-memory catalog store: the CRUD collaborator the pricing core reads
// through its lookup traits. One table per entity, integer ids from a
// per-table sequence. Process-lifetime state only; no persistence engine.
// ---------------------------------------------------------------------------

/// One entity table: rows keyed by id plus the id sequence.
pub struct Table<T: Clone> {
    rows: DashMap<i64, T>,
    seq: AtomicI64,
}

impl<T: Clone> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: DashMap::new(),
            seq: AtomicI64::new(0),
        }
    }
}

impl<T: Clone> Table<T> {
    /// Insert a new row built from the next id in the sequence.
    pub fn insert_with(&self, build: impl FnOnce(i64) -> T) -> T {
        let id = self.seq.fetch_add(1, Ordering::Relaxed) + 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    pub fn get(&self, id: i64) -> Option<T> {
        self.rows.get(&id).map(|row| row.clone())
    }

    pub fn list(&self) -> Vec<T> {
        self.rows.iter().map(|row| row.clone()).collect()
    }

    /// Overwrite an existing row. Returns false when the id is unknown.
    pub fn replace(&self, id: i64, row: T) -> bool {
        match self.rows.get_mut(&id) {
            Some(mut slot) => {
                *slot = row;
                true
            }
            None => false,
        }
    }

    pub fn remove(&self, id: i64) -> bool {
        self.rows.remove(&id).is_some()
    }
}

#[derive(Default)]
pub struct CatalogStore {
    pub ingredients: Table<Ingredient>,
    pub templates: Table<Template>,
    pub cakes: Table<Cake>,
    pub cake_types: Table<CakeType>,
    pub cake_shapes: Table<CakeShape>,
    pub cake_sizes: Table<CakeSize>,
    pub fillings: Table<Filling>,
    pub frostings: Table<Frosting>,
    pub roles: Table<Role>,
}

impl CatalogStore {
    /// Cake by id with its template joined in. A dangling template
    /// reference joins as None, which the pricing core reads as
    /// "no base ingredients".
    pub fn cake_with_template(&self, id: i64) -> Option<Cake> {
        let mut cake = self.cakes.get(id)?;
        cake.template = self.templates.get(cake.template_id);
        Some(cake)
    }

    pub fn cakes_with_templates(&self) -> Vec<Cake> {
        let mut rows = self.cakes.list();
        rows.sort_by_key(|c| c.id);
        for cake in &mut rows {
            cake.template = self.templates.get(cake.template_id);
        }
        rows
    }
}

impl IngredientCosts for CatalogStore {
    fn cost_per_unit(&self, ingredient_id: i64) -> Option<Decimal> {
        self.ingredients.get(ingredient_id).map(|i| i.cost_per_unit)
    }
}

impl SizeLookup for CatalogStore {
    fn dimensions_for(&self, size_id: i64) -> Option<String> {
        self.cake_sizes.get(size_id).and_then(|s| s.dimensions)
    }
}
