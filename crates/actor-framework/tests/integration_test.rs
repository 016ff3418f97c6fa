use actor_framework::{ActorEntity, FrameworkError, Query, ResourceActor};
use async_trait::async_trait;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Parcel {
    id: u32,
    owner: String,
    weight: u32,
    sealed: bool,
}

#[derive(Debug)]
struct ParcelCreate {
    owner: String,
    weight: u32,
}

#[derive(Debug)]
struct ParcelUpdate {
    weight: Option<u32>,
}

#[derive(Debug)]
enum ParcelAction {
    Seal,
}

#[derive(Debug, PartialEq, thiserror::Error)]
enum ParcelError {
    #[error("weight must be positive")]
    ZeroWeight,
    #[error("parcel {0} already sealed")]
    AlreadySealed(u32),
}

#[async_trait]
impl ActorEntity for Parcel {
    type Id = u32;
    type Create = ParcelCreate;
    type Update = ParcelUpdate;
    type Action = ParcelAction;
    type ActionResult = ();
    type Context = ();
    type Error = ParcelError;

    fn from_create_params(id: u32, params: ParcelCreate) -> Result<Self, Self::Error> {
        if params.weight == 0 {
            return Err(ParcelError::ZeroWeight);
        }
        Ok(Self {
            id,
            owner: params.owner,
            weight: params.weight,
            sealed: false,
        })
    }

    async fn on_update(&mut self, update: ParcelUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(weight) = update.weight {
            self.weight = weight;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: ParcelAction, _ctx: &()) -> Result<(), Self::Error> {
        match action {
            ParcelAction::Seal if self.sealed => Err(ParcelError::AlreadySealed(self.id)),
            ParcelAction::Seal => {
                self.sealed = true;
                Ok(())
            }
        }
    }
}

fn parcel(owner: &str, weight: u32) -> ParcelCreate {
    ParcelCreate {
        owner: owner.to_string(),
        weight,
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::<Parcel>::new(10);
    let handle = tokio::spawn(actor.run(()));

    let id: u32 = client.create(parcel("ana", 3)).await.unwrap();
    assert_eq!(id, 1);

    client.perform_action(id, ParcelAction::Seal).await.unwrap();
    let stored: Parcel = client.get(id).await.unwrap().unwrap();
    assert!(stored.sealed);

    let updated = client
        .update(id, ParcelUpdate { weight: Some(9) })
        .await
        .unwrap();
    assert_eq!(updated.weight, 9);

    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_entity_errors_survive_the_channel() {
    let (actor, client) = ResourceActor::<Parcel>::new(10);
    tokio::spawn(actor.run(()));

    let err = client.create(parcel("ana", 0)).await.unwrap_err();
    assert_eq!(
        err.downcast_entity::<ParcelError>().unwrap(),
        ParcelError::ZeroWeight
    );

    let id = client.create(parcel("ana", 1)).await.unwrap();
    client.perform_action(id, ParcelAction::Seal).await.unwrap();
    let err = client
        .perform_action(id, ParcelAction::Seal)
        .await
        .unwrap_err();
    assert_eq!(
        err.downcast_entity::<ParcelError>().unwrap(),
        ParcelError::AlreadySealed(id)
    );

    let missing = client.perform_action(99, ParcelAction::Seal).await;
    assert!(matches!(missing, Err(FrameworkError::NotFound(id)) if id == "99"));
}

#[tokio::test]
async fn test_failed_create_does_not_reuse_ids() {
    let (actor, client) = ResourceActor::<Parcel>::new(10);
    tokio::spawn(actor.run(()));

    assert_eq!(client.create(parcel("ana", 1)).await.unwrap(), 1);
    assert!(client.create(parcel("ana", 0)).await.is_err());
    assert_eq!(client.create(parcel("ana", 1)).await.unwrap(), 3);
}

#[tokio::test]
async fn test_query_filters_orders_and_limits() {
    let (actor, client) = ResourceActor::<Parcel>::new(10);
    tokio::spawn(actor.run(()));

    for (owner, weight) in [("ana", 1), ("bo", 2), ("ana", 3), ("ana", 4), ("bo", 5)] {
        client.create(parcel(owner, weight)).await.unwrap();
    }

    let weights = |parcels: Vec<Parcel>| parcels.iter().map(|p| p.weight).collect::<Vec<_>>();

    let all = client.query(Query::all()).await.unwrap();
    assert_eq!(weights(all), vec![1, 2, 3, 4, 5]);

    let anas = client
        .query(Query::matching(|p: &Parcel| p.owner == "ana"))
        .await
        .unwrap();
    assert_eq!(weights(anas), vec![1, 3, 4]);

    let newest_anas = client
        .query(
            Query::matching(|p: &Parcel| p.owner == "ana")
                .newest_first()
                .limit(2),
        )
        .await
        .unwrap();
    assert_eq!(weights(newest_anas), vec![4, 3]);

    let nobody = client
        .query(Query::matching(|p: &Parcel| p.owner == "cy"))
        .await
        .unwrap();
    assert!(nobody.is_empty());
}

#[tokio::test]
async fn test_closed_actor_reports_actor_closed() {
    let (actor, client) = ResourceActor::<Parcel>::new(1);
    drop(actor);

    let result = client.get(1).await;
    assert!(matches!(result, Err(FrameworkError::ActorClosed)));
}
