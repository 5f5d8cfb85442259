use serde::{Deserialize, Serialize};
use surge_format::{
    AggregateReadFormatting, AggregateWriteFormatting, EventReadFormatting, Headers,
    JsonFormatter, SerializedMessage, write_events,
};
use surge_macros::surge_event;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct BankAccount {
    account_number: Uuid,
    account_owner: String,
    balance: f64,
    opened: bool,
}

#[derive(Debug, Error)]
enum AccountError {
    #[error("account already opened")]
    AlreadyOpened,
    #[error("account not opened")]
    NotOpened,
    #[error("insufficient funds: balance={balance}, requested={requested}")]
    InsufficientFunds { balance: f64, requested: f64 },
}

#[derive(Debug)]
enum AccountCommand {
    Open { owner: String, initial_balance: f64 },
    Deposit { amount: f64 },
    Withdraw { amount: f64 },
}

#[surge_event]
enum BankAccountEvent {
    Created {
        #[routing_key]
        account_number: Uuid,
        account_owner: String,
        balance: f64,
    },
    Updated {
        #[routing_key]
        account_number: Uuid,
        balance: f64,
    },
}

impl BankAccount {
    fn execute(&self, command: AccountCommand) -> Result<Vec<BankAccountEvent>, AccountError> {
        match command {
            AccountCommand::Open {
                owner,
                initial_balance,
            } => {
                if self.opened {
                    return Err(AccountError::AlreadyOpened);
                }
                Ok(vec![BankAccountEvent::Created {
                    account_number: self.account_number,
                    account_owner: owner,
                    balance: initial_balance,
                }])
            }
            AccountCommand::Deposit { amount } => {
                if !self.opened {
                    return Err(AccountError::NotOpened);
                }
                Ok(vec![BankAccountEvent::Updated {
                    account_number: self.account_number,
                    balance: self.balance + amount,
                }])
            }
            AccountCommand::Withdraw { amount } => {
                if !self.opened {
                    return Err(AccountError::NotOpened);
                }
                if self.balance < amount {
                    return Err(AccountError::InsufficientFunds {
                        balance: self.balance,
                        requested: amount,
                    });
                }
                Ok(vec![BankAccountEvent::Updated {
                    account_number: self.account_number,
                    balance: self.balance - amount,
                }])
            }
        }
    }

    fn apply(&mut self, event: &BankAccountEvent) {
        match event {
            BankAccountEvent::Created {
                account_owner,
                balance,
                ..
            } => {
                self.account_owner = account_owner.clone();
                self.balance = *balance;
                self.opened = true;
            }
            BankAccountEvent::Updated { balance, .. } => {
                self.balance = *balance;
            }
        }
    }
}

fn describe(msg: &SerializedMessage) -> String {
    format!(
        "key={} headers={:?} payload={}",
        msg.key(),
        msg.headers(),
        String::from_utf8_lossy(msg.payload())
    )
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("surge_format=debug".parse()?))
        .init();

    let formatter = JsonFormatter::builder()
        .headers(Headers::from([(
            "content-type".to_string(),
            "application/json".to_string(),
        )]))
        .build();

    let mut account = BankAccount {
        account_number: Uuid::new_v4(),
        ..Default::default()
    };

    let commands = vec![
        AccountCommand::Open {
            owner: "Jane Doe".into(),
            initial_balance: 100.0,
        },
        AccountCommand::Deposit { amount: 50.0 },
        AccountCommand::Withdraw { amount: 30.0 },
        AccountCommand::Withdraw { amount: 500.0 },
    ];

    let mut published = Vec::new();
    for command in commands {
        let events = match account.execute(command) {
            Ok(events) => events,
            Err(err) => {
                info!(error = %err, "command rejected");
                continue;
            }
        };
        for event in &events {
            account.apply(event);
        }
        published.extend(write_events(&formatter, &events)?);
    }

    for msg in &published {
        let event: BankAccountEvent = formatter.read_event(msg.payload())?;
        info!(msg = %describe(msg), ?event, "published");
    }

    let snapshot = formatter.write_state(&account)?;
    let restored: BankAccount = formatter.read_state(snapshot.payload())?;
    info!(
        account_number = %restored.account_number,
        balance = restored.balance,
        "snapshot restored"
    );
    anyhow::ensure!(restored == account, "snapshot does not match account state");

    Ok(())
}
