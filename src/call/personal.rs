use crate::types::TransactionRequest;

rpc_calls! {
    /// Imports a hex private key, returns the new account's address.
    ImportRawKey => "personal_importRawKey" -> String {
        key: String,
        passphrase: String,
    };

    ListAccounts => "personal_listAccounts" -> Vec<String>;

    LockAccount => "personal_lockAccount" -> bool {
        address: String,
    };

    NewAccount => "personal_newAccount" -> String {
        passphrase: String,
    };

    /// `duration` in seconds; the node's default applies when absent.
    UnlockAccount => "personal_unlockAccount" -> bool {
        address: String,
        passphrase: String,
    } [
        duration: u64,
    ];

    SendTransaction => "personal_sendTransaction" -> String {
        transaction: TransactionRequest,
        passphrase: String,
    };

    Sign => "personal_sign" -> String {
        message: String,
        account: String,
    } [
        password: String,
    ];

    EcRecover => "personal_ecRecover" -> String {
        message: String,
        signature: String,
    };
}
