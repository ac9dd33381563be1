//! Collection binding.

use super::foreign_key::{ForeignKeyResolver, KeyTarget};
use super::{AttributeBinder, NamingStrategy};
use crate::binding::{
    AttributeBinding, ComponentAttribute, ElementKind, EntityBinding, PluralAttributeBinding,
    PluralAttributeElementBinding, PluralAttributeIndexBinding, PluralAttributeKeyBinding,
    PluralAttributeNature, RelationalValueBinding, SingularAttributeBinding, ValueOwnership,
};
use crate::config::BinderConfig;
use crate::error::{BindingError, Result};
use crate::relational::{ColumnId, Identifier, JdbcType, Schema, TableId};
use crate::source::{
    BasicElementSource, CompositeElementSource, ElementSource, EntitySource, IndexSource,
    ManyToManyElementSource, PluralAttributeSource,
};
use crate::types::{TypeRegistry, TypeResolver};
use indexmap::IndexMap;
use std::collections::HashSet;
use tracing::debug;

/// Binds collection attributes once every entity's identifier is known.
pub struct PluralAttributeBinder<'a> {
    schema: &'a mut Schema,
    registry: &'a TypeRegistry,
    naming: &'a dyn NamingStrategy,
    config: &'a BinderConfig,
}

impl<'a> PluralAttributeBinder<'a> {
    /// Create a binder over `schema`.
    pub fn new(
        schema: &'a mut Schema,
        registry: &'a TypeRegistry,
        naming: &'a dyn NamingStrategy,
        config: &'a BinderConfig,
    ) -> Self {
        Self {
            schema,
            registry,
            naming,
            config,
        }
    }

    /// Bind one collection of `owner`.
    ///
    /// `entities` holds every entity binding with its singular attributes
    /// already bound. The returned binding is complete; nothing is attached to
    /// the owner here.
    pub fn bind(
        &mut self,
        owner_source: &EntitySource,
        owner: &EntityBinding,
        entities: &IndexMap<String, EntityBinding>,
        source: &PluralAttributeSource,
    ) -> Result<PluralAttributeBinding> {
        let role = format!("{}.{}", owner.entity_name(), source.name);
        let types = TypeResolver::new(self.registry);

        let type_descriptor = types.resolve_collection(
            &role,
            source.nature,
            source.type_name.as_deref(),
            source.java_type.as_deref(),
            &source.type_parameters,
        )?;

        let table = self.collection_table(&role, owner, source)?;
        let key = self.bind_key(&role, owner_source, owner, table, source)?;
        let key_columns = key.foreign_key().source_columns().to_vec();

        let element = match &source.element {
            ElementSource::Basic(basic) => self.bind_basic_element(&role, table, source, basic)?,
            ElementSource::Composite(composite) => {
                self.bind_composite_element(&role, table, composite)?
            }
            ElementSource::ManyToMany(many) => {
                self.bind_many_to_many_element(&role, table, owner, entities, source, many)?
            }
        };

        let index = self.bind_index(&role, table, source)?;

        let primary_key = match source.nature {
            PluralAttributeNature::Bag => Vec::new(),
            PluralAttributeNature::Set => {
                let element_columns: Option<Vec<ColumnId>> = element
                    .relational_value_bindings()
                    .iter()
                    .map(|value| match value.value().as_column() {
                        Some(column) if !value.is_nullable() => Some(column),
                        _ => None,
                    })
                    .collect();
                match element_columns {
                    Some(columns) => key_columns.iter().copied().chain(columns).collect(),
                    None => Vec::new(),
                }
            }
            PluralAttributeNature::List | PluralAttributeNature::Map => key_columns
                .iter()
                .copied()
                .chain(index.as_ref().and_then(PluralAttributeIndexBinding::column))
                .collect(),
        };
        if !primary_key.is_empty() {
            self.schema.set_primary_key(table, primary_key);
        }

        let fetch_timing = source.fetch_timing.unwrap_or(self.config.default_fetch_timing);

        debug!(
            role = %role,
            nature = %source.nature,
            element = ?element.plural_attribute_element_nature(),
            fetch_timing = %fetch_timing,
            primary_key_span = self.schema.table(table).primary_key().column_span(),
            "Bound collection"
        );

        Ok(PluralAttributeBinding {
            attribute_name: source.name.clone(),
            role,
            nature: source.nature,
            owner_entity_name: owner.entity_name().to_string(),
            type_descriptor,
            key,
            element,
            index,
            fetch_timing,
        })
    }

    fn collection_table(
        &mut self,
        role: &str,
        owner: &EntityBinding,
        source: &PluralAttributeSource,
    ) -> Result<TableId> {
        let name = match &source.table {
            Some(table) => Identifier::new(table),
            None => Identifier::new(
                self.naming
                    .collection_table_name(owner.entity_name(), &source.name),
            ),
        };
        if self.schema.locate_table(name.clone()).is_some() {
            return Err(BindingError::invalid(
                role,
                format!("collection table '{name}' is already mapped"),
            ));
        }
        Ok(self.schema.locate_or_create_table(&name))
    }

    fn bind_key(
        &mut self,
        role: &str,
        owner_source: &EntitySource,
        owner: &EntityBinding,
        table: TableId,
        source: &PluralAttributeSource,
    ) -> Result<PluralAttributeKeyBinding> {
        let referenced = source
            .key
            .property_ref
            .as_deref()
            .unwrap_or_else(|| owner.entity_identifier().attribute_name());
        let target_attribute = key_target_attribute(role, owner_source, owner, referenced)?;
        let target = KeyTarget::from_attribute(
            role,
            owner.entity_name(),
            owner.primary_table(),
            target_attribute,
        )?;

        let owner_table = self
            .schema
            .table(owner.primary_table())
            .logical_name()
            .text()
            .to_string();
        let names: Vec<Identifier> = if source.key.columns.is_empty() {
            target
                .columns
                .iter()
                .map(|column| {
                    let target_name = self.schema.column(*column).name().text();
                    Identifier::new(self.naming.key_column_name(&owner_table, target_name))
                })
                .collect()
        } else {
            source.key.columns.iter().map(Identifier::new).collect()
        };

        let mut columns = Vec::with_capacity(names.len());
        for name in &names {
            let id = self.schema.locate_or_create_column(table, name);
            self.schema.column_mut(id).set_nullable(false);
            columns.push(id);
        }

        let foreign_key = ForeignKeyResolver::new(&mut *self.schema).resolve(
            role,
            table,
            columns,
            &target,
            source.key.on_delete,
            source.key.on_update,
        )?;

        Ok(PluralAttributeKeyBinding::new(
            role,
            table,
            foreign_key,
            source.inverse,
            referenced,
            target_attribute.type_descriptor().clone(),
        ))
    }

    fn bind_basic_element(
        &mut self,
        role: &str,
        table: TableId,
        source: &PluralAttributeSource,
        element: &BasicElementSource,
    ) -> Result<PluralAttributeElementBinding> {
        let descriptor = TypeResolver::new(self.registry).resolve_basic(
            role,
            element.type_name.as_deref(),
            element.java_type.as_deref(),
            &element.type_parameters,
        )?;

        let name = match &element.column {
            Some(column) => Identifier::new(column),
            None => Identifier::new(self.naming.element_column_name(&source.name)),
        };
        let nullable = element.nullable.unwrap_or(true);
        let data_type = descriptor.resolved_type_mapping().jdbc_type();
        let column = self.new_column(role, table, &name, nullable, data_type)?;

        Ok(PluralAttributeElementBinding::new(
            descriptor,
            vec![RelationalValueBinding::column(column, nullable, ValueOwnership::Exclusive)],
            ElementKind::Basic,
        ))
    }

    fn bind_composite_element(
        &mut self,
        role: &str,
        table: TableId,
        element: &CompositeElementSource,
    ) -> Result<PluralAttributeElementBinding> {
        if element.attributes.is_empty() {
            return Err(BindingError::invalid(
                role,
                format!("component '{}' declares no attributes", element.class),
            ));
        }

        let descriptor = TypeResolver::new(self.registry).resolve_component(role, &element.class);
        let mut binder = AttributeBinder::new(&mut *self.schema, self.registry, self.naming);
        let mut seen = HashSet::new();
        let mut values = Vec::new();
        let mut components = Vec::with_capacity(element.attributes.len());

        for attribute in &element.attributes {
            if !seen.insert(attribute.name.as_str()) {
                return Err(BindingError::DuplicateAttribute {
                    entity: element.class.clone(),
                    attribute: attribute.name.clone(),
                });
            }

            let binding = binder.bind_singular(role, table, attribute, false)?;
            if binding
                .relational_value_bindings()
                .iter()
                .any(|value| value.ownership() == ValueOwnership::Shared)
            {
                return Err(BindingError::invalid(
                    role,
                    format!("component attribute '{}' reuses a mapped column", attribute.name),
                ));
            }

            let start = values.len();
            values.extend(binding.relational_value_bindings().iter().cloned());
            components.push(ComponentAttribute::new(
                binding.attribute_name(),
                binding.type_descriptor().clone(),
                start..values.len(),
            ));
        }

        Ok(PluralAttributeElementBinding::new(
            descriptor,
            values,
            ElementKind::Composite(components),
        ))
    }

    fn bind_many_to_many_element(
        &mut self,
        role: &str,
        table: TableId,
        owner: &EntityBinding,
        entities: &IndexMap<String, EntityBinding>,
        source: &PluralAttributeSource,
        element: &ManyToManyElementSource,
    ) -> Result<PluralAttributeElementBinding> {
        let target_entity = entities.get(&element.entity).ok_or_else(|| {
            BindingError::invalid(role, format!("unknown target entity '{}'", element.entity))
        })?;
        let identifier = target_entity.identifier_attribute_binding();
        let target = KeyTarget::from_attribute(
            role,
            target_entity.entity_name(),
            target_entity.primary_table(),
            identifier,
        )?;

        let self_reference = target_entity.primary_table() == owner.primary_table();
        let target_table = self
            .schema
            .table(target_entity.primary_table())
            .logical_name()
            .text()
            .to_string();
        let names: Vec<Identifier> = if element.columns.is_empty() {
            target
                .columns
                .iter()
                .map(|column| {
                    let target_name = self.schema.column(*column).name().text();
                    let name = if self_reference {
                        self.naming
                            .self_reference_column_name(&source.name, target_name)
                    } else {
                        self.naming
                            .many_to_many_column_name(&target_table, target_name)
                    };
                    Identifier::new(name)
                })
                .collect()
        } else {
            element.columns.iter().map(Identifier::new).collect()
        };

        let mut columns = Vec::with_capacity(names.len());
        for name in &names {
            columns.push(self.new_column(role, table, name, false, None)?);
        }
        let values = columns
            .iter()
            .map(|column| RelationalValueBinding::column(*column, false, ValueOwnership::Exclusive))
            .collect();

        let foreign_key = ForeignKeyResolver::new(&mut *self.schema).resolve(
            role,
            table,
            columns,
            &target,
            Default::default(),
            Default::default(),
        )?;

        Ok(PluralAttributeElementBinding::new(
            TypeResolver::new(self.registry).resolve_entity(&element.entity),
            values,
            ElementKind::ManyToMany {
                entity_name: element.entity.clone(),
                foreign_key,
            },
        ))
    }

    fn bind_index(
        &mut self,
        role: &str,
        table: TableId,
        source: &PluralAttributeSource,
    ) -> Result<Option<PluralAttributeIndexBinding>> {
        let default_class = match source.nature {
            PluralAttributeNature::List => "java.lang.Integer",
            PluralAttributeNature::Map => "java.lang.String",
            PluralAttributeNature::Bag | PluralAttributeNature::Set => {
                if source.index.is_some() {
                    return Err(BindingError::invalid(
                        role,
                        format!("a {} cannot declare an index", source.nature),
                    ));
                }
                return Ok(None);
            }
        };

        let defaulted = IndexSource::default();
        let index = source.index.as_ref().unwrap_or(&defaulted);
        if source.nature == PluralAttributeNature::Map && index.base != 0 {
            return Err(BindingError::invalid(role, "a map key has no base"));
        }

        let java_type = match (&index.type_name, &index.java_type) {
            (None, None) => Some(default_class),
            (_, java_type) => java_type.as_deref(),
        };
        let descriptor = TypeResolver::new(self.registry).resolve_basic(
            role,
            index.type_name.as_deref(),
            java_type,
            &IndexMap::new(),
        )?;

        let name = match &index.column {
            Some(column) => Identifier::new(column),
            None => Identifier::new(self.naming.index_column_name(&source.name, source.nature)),
        };
        let data_type = descriptor.resolved_type_mapping().jdbc_type();
        let column = self.new_column(role, table, &name, false, data_type)?;

        Ok(Some(PluralAttributeIndexBinding::new(
            descriptor,
            RelationalValueBinding::column(column, false, ValueOwnership::Exclusive),
            index.base,
        )))
    }

    /// Create a column that no other part of the collection maps yet.
    fn new_column(
        &mut self,
        role: &str,
        table: TableId,
        name: &Identifier,
        nullable: bool,
        data_type: Option<JdbcType>,
    ) -> Result<ColumnId> {
        if self.schema.table(table).locate_column(name.clone()).is_some() {
            return Err(BindingError::invalid(
                role,
                format!("column '{name}' is mapped twice in the collection table"),
            ));
        }
        let id = self.schema.locate_or_create_column(table, name);
        let column = self.schema.column_mut(id);
        column.set_nullable(nullable);
        if let Some(data_type) = data_type {
            column.set_data_type(data_type);
        }
        Ok(id)
    }
}

/// Find the owner attribute a collection key references.
fn key_target_attribute<'e>(
    role: &str,
    owner_source: &EntitySource,
    owner: &'e EntityBinding,
    attribute: &str,
) -> Result<&'e SingularAttributeBinding> {
    let target_error = |reason: &str| BindingError::ForeignKeyTarget {
        context: role.to_string(),
        entity: owner.entity_name().to_string(),
        attribute: attribute.to_string(),
        reason: reason.to_string(),
    };

    match owner.locate_attribute_binding(attribute) {
        Some(AttributeBinding::Singular(binding)) if binding.is_unique() => Ok(binding),
        Some(AttributeBinding::Singular(_)) => Err(target_error("attribute is not unique")),
        Some(AttributeBinding::Plural(_)) => Err(target_error("attribute is a collection")),
        None if owner_source.plural_attributes().any(|p| p.name == attribute) => {
            Err(target_error("attribute is a collection"))
        }
        None => Err(target_error("no such attribute")),
    }
}
