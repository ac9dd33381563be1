//! Metadata assembly.

use super::{AttributeBinder, DefaultNamingStrategy, NamingStrategy, PluralAttributeBinder};
use crate::binding::{AttributeBinding, EntityBinding};
use crate::config::BinderConfig;
use crate::error::{BindingError, Result};
use crate::metadata::Metadata;
use crate::relational::{Identifier, Schema};
use crate::source::{EntitySource, MetadataSources};
use crate::types::TypeRegistry;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Builds [`Metadata`] from mapping sources.
///
/// Binding runs in three phases: entity tables with their identifiers and
/// singular attributes, then collections, then the optional foreign-key
/// naming pass. The first error aborts the build and nothing is published.
pub struct MetadataBuilder {
    sources: MetadataSources,
    config: BinderConfig,
    registry: TypeRegistry,
    naming: Option<Box<dyn NamingStrategy>>,
}

impl MetadataBuilder {
    /// Create a builder with the default configuration and type registry.
    pub fn new(sources: MetadataSources) -> Self {
        Self {
            sources,
            config: BinderConfig::default(),
            registry: TypeRegistry::default(),
            naming: None,
        }
    }

    /// Set the binder configuration.
    pub fn with_config(mut self, config: BinderConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the type registry.
    pub fn with_type_registry(mut self, registry: TypeRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Replace the naming strategy.
    ///
    /// Without one, [`DefaultNamingStrategy`] is built from the configuration.
    pub fn with_naming_strategy(mut self, naming: Box<dyn NamingStrategy>) -> Self {
        self.naming = Some(naming);
        self
    }

    /// Bind every source and publish the result.
    #[instrument(skip(self), fields(entities = self.sources.len()))]
    pub fn build(&self) -> Result<Metadata> {
        let start = Instant::now();
        let default_naming;
        let naming: &dyn NamingStrategy = match &self.naming {
            Some(naming) => naming.as_ref(),
            None => {
                default_naming = DefaultNamingStrategy::new(&self.config);
                &default_naming
            }
        };

        let mut schema = Schema::new();
        let mut entities = self.bind_entities(&mut schema, naming)?;
        let collections = self.bind_collections(&mut schema, naming, &mut entities)?;

        if self.config.name_foreign_keys {
            name_foreign_keys(&schema, naming, &mut entities);
        }

        info!(
            entities = entities.len(),
            collections = collections.len(),
            tables = schema.table_count(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Metadata built"
        );

        Ok(Metadata::new(schema, entities, collections))
    }

    fn bind_entities(
        &self,
        schema: &mut Schema,
        naming: &dyn NamingStrategy,
    ) -> Result<IndexMap<String, EntityBinding>> {
        let mut entities: IndexMap<String, EntityBinding> = IndexMap::new();

        for source in &self.sources.entities {
            if entities.contains_key(&source.name) {
                return Err(BindingError::DuplicateEntity {
                    entity: source.name.clone(),
                });
            }
            check_attribute_names(source)?;

            let table_name = match &source.table {
                Some(table) => Identifier::new(table),
                None => Identifier::new(naming.entity_table_name(&source.name)),
            };
            if let Some(other) = entities
                .values()
                .find(|e| schema.table(e.primary_table()).logical_name() == &table_name)
            {
                return Err(BindingError::invalid(
                    &source.name,
                    format!("table '{table_name}' is already mapped by '{}'", other.entity_name()),
                ));
            }
            let table = schema.locate_or_create_table(&table_name);

            let mut binder = AttributeBinder::new(schema, &self.registry, naming);
            let identifier = binder.bind_singular(&source.name, table, &source.identifier, true)?;
            let mut entity = EntityBinding::new(&source.name, table, identifier);
            for attribute in source.singular_attributes() {
                let binding = binder.bind_singular(&source.name, table, attribute, false)?;
                entity.add_attribute_binding(AttributeBinding::Singular(binding))?;
            }

            debug!(
                entity = %source.name,
                table = %table_name,
                attributes = entity.attribute_binding_count(),
                "Bound entity"
            );
            entities.insert(source.name.clone(), entity);
        }

        Ok(entities)
    }

    fn bind_collections(
        &self,
        schema: &mut Schema,
        naming: &dyn NamingStrategy,
        entities: &mut IndexMap<String, EntityBinding>,
    ) -> Result<IndexMap<String, (String, String)>> {
        let mut bound = Vec::new();
        {
            let mut binder =
                PluralAttributeBinder::new(schema, &self.registry, naming, &self.config);
            for source in &self.sources.entities {
                let owner = &entities[&source.name];
                for plural in source.plural_attributes() {
                    let binding = binder.bind(source, owner, entities, plural)?;
                    bound.push((source.name.clone(), binding));
                }
            }
        }

        let mut collections = IndexMap::with_capacity(bound.len());
        for (entity_name, binding) in bound {
            collections.insert(
                binding.role().to_string(),
                (entity_name.clone(), binding.attribute_name().to_string()),
            );
            if let Some(owner) = entities.get_mut(&entity_name) {
                owner.add_attribute_binding(AttributeBinding::Plural(binding))?;
            }
        }

        Ok(collections)
    }
}

/// Reject repeated attribute names before anything is bound.
fn check_attribute_names(source: &EntitySource) -> Result<()> {
    let mut seen = HashSet::new();
    for name in source.attribute_names() {
        if !seen.insert(name) {
            return Err(BindingError::DuplicateAttribute {
                entity: source.name.clone(),
                attribute: name.to_string(),
            });
        }
    }
    Ok(())
}

/// Assign names to every foreign key owned by a collection.
fn name_foreign_keys(
    schema: &Schema,
    naming: &dyn NamingStrategy,
    entities: &mut IndexMap<String, EntityBinding>,
) {
    for entity in entities.values_mut() {
        for collection in entity.plural_attribute_bindings_mut() {
            for foreign_key in collection.foreign_keys_mut() {
                let table = schema.table(foreign_key.source_table()).logical_name().text();
                let columns: Vec<&str> = foreign_key
                    .source_columns()
                    .iter()
                    .map(|column| schema.column(*column).name().text())
                    .collect();
                let name = naming.foreign_key_name(table, &columns);
                debug!(foreign_key = %name, "Named foreign key");
                foreign_key.set_name(name);
            }
        }
    }
}
