use surge_format::RoutingKey;
use surge_macros::surge_event;
use uuid::Uuid;

#[surge_event]
enum BankAccountEvent {
    Created {
        #[routing_key]
        account_number: Uuid,
        owner: String,
    },
    Updated {
        owner: String,
        #[routing_key]
        account_number: Uuid,
    },
    Closed(String, #[routing_key] Uuid),
}

fn main() {
    let id = Uuid::new_v4();
    let events = [
        BankAccountEvent::Created {
            account_number: id,
            owner: "alice".into(),
        },
        BankAccountEvent::Updated {
            owner: "bob".into(),
            account_number: id,
        },
        BankAccountEvent::Closed("done".into(), id),
    ];
    for evt in &events {
        assert_eq!(evt.routing_key(), id.to_string());
    }
}
