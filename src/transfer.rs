use tracing::{error, info, warn};

use crate::account::Account;
use crate::error::AccountError;
use crate::money::Money;

/// Moves `amount` from `source` to `destination`.
///
/// The withdrawal error wins over the deposit error. When the destination
/// refuses the deposit, the source is credited back before the deposit error
/// is returned, so a failed transfer leaves both balances as they were.
pub fn transfer<S, D>(source: &mut S, destination: &mut D, amount: Money) -> Result<(), AccountError>
where
    S: Account + ?Sized,
    D: Account + ?Sized,
{
    source.withdraw(amount)?;

    if let Err(deposit_error) = destination.deposit(amount) {
        if let Err(reversal_error) = source.deposit(amount) {
            error!(
                source = source.number(),
                destination = destination.number(),
                %amount,
                %deposit_error,
                %reversal_error,
                "transfer lost money: source could not be credited back"
            );
            return Err(AccountError::ReversalFailed {
                number: source.number().to_string(),
                amount,
            });
        }
        warn!(
            source = source.number(),
            destination = destination.number(),
            %amount,
            %deposit_error,
            "transfer reversed"
        );
        return Err(deposit_error);
    }

    info!(
        source = source.number(),
        destination = destination.number(),
        %amount,
        "transferred {} from {} to {}",
        amount,
        source.number(),
        destination.number()
    );
    Ok(())
}
