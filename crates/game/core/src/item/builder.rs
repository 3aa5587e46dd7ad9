use std::sync::Arc;

use crate::action::{ActionContext, ActionRegistry};
use crate::container::EquipSlots;
use crate::descriptor::Descriptor;
use crate::engine::Phase;
use crate::error::ConfigError;
use crate::stats::Stat;

use super::{
    AttackCapability, ConsumeCapability, DefendCapability, EquipCapability, Item, ItemBehavior,
    ItemCore, StandardBehavior, StatusCapability,
};

/// Data form of an item, as read from content files.
///
/// All fields default to zero/empty; at least one capability must be present.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemSpec {
    pub descriptor: Descriptor,
    pub stat: Stat,
    pub equip: Option<EquipSpec>,
    pub consume: Option<ConsumeCapability>,
    pub attack: Option<AttackCapability>,
    pub defend: Option<DefendCapability>,
    pub status: Option<StatusCapability>,
}

/// Equip capability with slots given by their snake_case identifiers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EquipSpec {
    pub stat_to_equip: Stat,
    pub stat_on_equip: Stat,
    pub slots: Vec<String>,
}

impl EquipSpec {
    pub fn resolve(&self) -> Result<EquipCapability, ConfigError> {
        Ok(EquipCapability {
            stat_to_equip: self.stat_to_equip,
            stat_on_equip: self.stat_on_equip,
            slots: EquipSlots::parse(&self.slots)?,
        })
    }
}

/// Builder for constructing items.
pub struct ItemBuilder {
    descriptor: Descriptor,
    stat: Stat,
    equip: Option<EquipCapability>,
    consume: Option<ConsumeCapability>,
    attack: Option<AttackCapability>,
    defend: Option<DefendCapability>,
    status: Option<StatusCapability>,
    actions: ActionRegistry,
    behavior: Arc<dyn ItemBehavior>,
}

impl ItemBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            descriptor: Descriptor::named(name),
            stat: Stat::ZERO,
            equip: None,
            consume: None,
            attack: None,
            defend: None,
            status: None,
            actions: ActionRegistry::new(),
            behavior: Arc::new(StandardBehavior),
        }
    }

    /// Starts from a data spec, resolving slot identifiers.
    pub fn from_spec(spec: ItemSpec) -> Result<Self, ConfigError> {
        let equip = spec.equip.as_ref().map(EquipSpec::resolve).transpose()?;
        Ok(Self {
            descriptor: spec.descriptor,
            stat: spec.stat,
            equip,
            consume: spec.consume,
            attack: spec.attack,
            defend: spec.defend,
            status: spec.status,
            ..Self::new(String::new())
        })
    }

    /// Replaces the whole descriptor, name included.
    pub fn descriptor(mut self, descriptor: Descriptor) -> Self {
        self.descriptor = descriptor;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.descriptor.description = description.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.descriptor.category = category.into();
        self
    }

    pub fn sub_category(mut self, sub_category: impl Into<String>) -> Self {
        self.descriptor.sub_category = sub_category.into();
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.descriptor.tags.insert(tag.into());
        self
    }

    pub fn stat(mut self, stat: Stat) -> Self {
        self.stat = stat;
        self
    }

    pub fn equip(mut self, capability: EquipCapability) -> Self {
        self.equip = Some(capability);
        self
    }

    pub fn consume(mut self, capability: ConsumeCapability) -> Self {
        self.consume = Some(capability);
        self
    }

    pub fn attack(mut self, capability: AttackCapability) -> Self {
        self.attack = Some(capability);
        self
    }

    pub fn defend(mut self, capability: DefendCapability) -> Self {
        self.defend = Some(capability);
        self
    }

    pub fn status(mut self, capability: StatusCapability) -> Self {
        self.status = Some(capability);
        self
    }

    pub fn behavior(self, behavior: impl ItemBehavior + 'static) -> Self {
        self.shared_behavior(Arc::new(behavior))
    }

    /// Uses a behavior instance shared with other items.
    pub fn shared_behavior(mut self, behavior: Arc<dyn ItemBehavior>) -> Self {
        self.behavior = behavior;
        self
    }

    /// Registers an item-scoped action.
    ///
    /// # Panics
    ///
    /// Panics if `phases` is empty.
    pub fn action<F>(mut self, name: impl Into<String>, phases: &[Phase], handler: F) -> Self
    where
        F: Fn(&mut ActionContext<'_>) -> i32 + Send + Sync + 'static,
    {
        self.actions.register(name, phases, handler);
        self
    }

    /// Validates and builds the item.
    ///
    /// Fails when no capability is declared, or when an equippable item
    /// declares no slot.
    pub fn try_build(self) -> Result<Item, ConfigError> {
        let core = ItemCore {
            descriptor: self.descriptor,
            stat: self.stat,
            active: false,
            saved: Stat::ZERO,
            equipped_by: None,
            equip: self.equip,
            consume: self.consume,
            attack: self.attack,
            defend: self.defend,
            status: self.status,
        };

        if core.capabilities().is_empty() {
            return Err(ConfigError::NoCapability(core.descriptor.name));
        }
        if core.equip.is_some_and(|cap| cap.slots.is_empty()) {
            return Err(ConfigError::NoSlotDeclared(core.descriptor.name));
        }

        Ok(Item {
            core,
            actions: self.actions,
            behavior: self.behavior,
        })
    }

    /// Builds the item.
    ///
    /// # Panics
    ///
    /// Panics on an invalid definition; use [`try_build`](Self::try_build)
    /// for definitions that come from data.
    pub fn build(self) -> Item {
        match self.try_build() {
            Ok(item) => item,
            Err(err) => panic!("invalid item definition: {err}"),
        }
    }
}

impl Item {
    /// Builds an item from its data form with the standard behavior.
    pub fn from_spec(spec: ItemSpec) -> Result<Item, ConfigError> {
        ItemBuilder::from_spec(spec)?.try_build()
    }
}
