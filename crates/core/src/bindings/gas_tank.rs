use alloy::sol;

sol! {
    #[sol(rpc)]
    contract GasTank {
        function depositGas(address receiver) external payable;
        function withdrawGas(uint256 amount) external;
        function addPayee(address payee) external;
        function removePayee(address payee) external;
        function approve(address payee, bool approved) external;
        function pay(address payer, address payee, uint256 amount) external;
        function emergencyWithdraw(address token, uint256 amount) external;
    }
}
