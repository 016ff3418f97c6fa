//! [`ActorEntity`] implementation for [`Address`].
//!
//! Directory entries are write-once: no updates and no custom actions.

use super::AddressError;
use crate::model::{Address, AddressCreate, AddressId};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for Address {
    type Id = AddressId;
    type Create = AddressCreate;
    type Update = Infallible;
    type Action = Infallible;
    type ActionResult = ();
    type Context = ();
    type Error = AddressError;

    fn from_create_params(id: AddressId, params: AddressCreate) -> Result<Self, AddressError> {
        if !params.location.is_valid() {
            return Err(AddressError::InvalidCoordinates(params.name));
        }
        Ok(Address::new(id, params.name, params.location))
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), AddressError> {
        match update {}
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &()) -> Result<(), AddressError> {
        match action {}
    }
}
