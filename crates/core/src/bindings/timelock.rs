use alloy::sol;

sol! {
    #[sol(rpc)]
    contract Timelock {
        function schedule(address target, uint256 value, bytes calldata data, bytes32 predecessor, bytes32 salt, uint256 delay) external;
        function execute(address target, uint256 value, bytes calldata payload, bytes32 predecessor, bytes32 salt) external payable;
        function cancel(bytes32 id) external;
        function getMinDelay() external view returns(uint256 delay);
        function hashOperation(address target, uint256 value, bytes calldata data, bytes32 predecessor, bytes32 salt) external pure returns(bytes32 hash);
        function isOperationPending(bytes32 id) external view returns(bool pending);
        function isOperationReady(bytes32 id) external view returns(bool ready);
        function isOperationDone(bytes32 id) external view returns(bool done);
        function getTimestamp(bytes32 id) external view returns(uint256 timestamp);
    }
}
